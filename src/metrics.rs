use crate::model::Reading;
use prometheus::{
    opts, register_gauge_vec_with_registry, Encoder, GaugeVec, Registry, TextEncoder,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),
    #[error("metrics are not valid UTF-8")]
    FormatError,
}

/// Gauges published for the configured device, registered in their own `Registry`.
pub struct MetricSet {
    registry: Registry,
    pub(crate) consumption: GaugeVec,
    pub(crate) feedin: GaugeVec,
    pub(crate) power: GaugeVec,
    pub(crate) outdated: GaugeVec,
}

impl MetricSet {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let consumption = register_gauge_vec_with_registry!(
            opts!(
                "powerfox_device_consumption",
                "Device consumption reading in kWh",
            ),
            &["device_id"],
            registry
        )?;
        let feedin = register_gauge_vec_with_registry!(
            opts!("powerfox_device_feedin", "Device feedin reading in kWh",),
            &["device_id"],
            registry
        )?;
        let power = register_gauge_vec_with_registry!(
            opts!("powerfox_device_power", "Device current power in W",),
            &["device_id"],
            registry
        )?;
        let outdated = register_gauge_vec_with_registry!(
            opts!(
                "powerfox_device_outdated",
                "Device data is currently outdated",
            ),
            &["device_id"],
            registry
        )?;

        Ok(MetricSet {
            registry,
            consumption,
            feedin,
            power,
            outdated,
        })
    }

    /// Overwrite all gauges of `device` with `reading`.
    pub fn publish(&self, device: &str, reading: &Reading) {
        self.consumption
            .with_label_values(&[device])
            .set(reading.consumption);
        self.feedin.with_label_values(&[device]).set(reading.feedin);
        self.power.with_label_values(&[device]).set(reading.power);
        self.outdated
            .with_label_values(&[device])
            .set(if reading.outdated { 1.0 } else { 0.0 });
    }

    /// Handle to the underlying registry, for serving scrapes.
    pub fn registry(&self) -> Registry {
        self.registry.clone()
    }
}

/// Read metrics from `registry` in Prometheus text format.
pub fn read(registry: &Registry) -> Result<String, Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();

    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).or(Err(Error::FormatError))
}

#[cfg(test)]
mod test {
    use super::*;

    fn reading() -> Reading {
        Reading {
            consumption: 12.345,
            feedin: 6.789,
            power: 450.0,
            outdated: true,
        }
    }

    #[test]
    fn publish_sets_all_gauges() {
        let metrics = MetricSet::new().unwrap();
        metrics.publish("dev1", &reading());

        assert_eq!(
            12.345,
            metrics.consumption.with_label_values(&["dev1"]).get()
        );
        assert_eq!(6.789, metrics.feedin.with_label_values(&["dev1"]).get());
        assert_eq!(450.0, metrics.power.with_label_values(&["dev1"]).get());
        assert_eq!(1.0, metrics.outdated.with_label_values(&["dev1"]).get());
    }

    #[test]
    fn read_exposition_format() {
        let metrics = MetricSet::new().unwrap();
        metrics.publish("dev1", &reading());

        let text = read(&metrics.registry()).unwrap();

        assert!(text.contains(
            "# HELP powerfox_device_consumption Device consumption reading in kWh"
        ));
        assert!(text.contains("# TYPE powerfox_device_power gauge"));
        assert!(text.contains("powerfox_device_consumption{device_id=\"dev1\"} 12.345"));
        assert!(text.contains("powerfox_device_feedin{device_id=\"dev1\"} 6.789"));
        assert!(text.contains("powerfox_device_power{device_id=\"dev1\"} 450"));
        assert!(text.contains("powerfox_device_outdated{device_id=\"dev1\"} 1"));
    }

    #[test]
    fn registries_are_independent() {
        let first = MetricSet::new().unwrap();
        let second = MetricSet::new().unwrap();
        first.publish("dev1", &reading());

        let text = read(&second.registry()).unwrap();
        assert!(!text.contains("dev1"));
    }
}
