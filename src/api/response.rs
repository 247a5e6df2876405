use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `GET /api/2.0/my/{device}/current/`. Fields not listed here are ignored.
#[derive(Debug, Deserialize)]
pub struct Current {
    /* energy drawn from the grid, in Wh */
    #[serde(rename = "A_Plus")]
    pub a_plus: f64,
    /* energy fed into the grid, in Wh */
    #[serde(rename = "A_Minus")]
    pub a_minus: f64,
    #[serde(rename = "Watt")]
    pub watt: f64,
    #[serde(rename = "Outdated", deserialize_with = "deserialize_flag")]
    pub outdated: bool,
}

/// Accepts either a JSON boolean or the numbers `0`/`1` (also written `0.0`/`1.0`).
fn deserialize_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(d)?;

    match value {
        Value::Bool(flag) => Ok(flag),
        Value::Number(ref n) => match n.as_f64() {
            Some(v) if v == 0.0 => Ok(false),
            Some(v) if v == 1.0 => Ok(true),
            _ => Err(serde::de::Error::custom(format!(
                "expected 0 or 1 for Outdated, got {}",
                n
            ))),
        },
        other => Err(serde::de::Error::custom(format!(
            "expected boolean for Outdated, got {}",
            other
        ))),
    }
}
