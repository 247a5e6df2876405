use crate::metrics;
use prometheus::Registry;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, content::RawHtml, Responder, Response};
use rocket::{get, routes, Build, Rocket, State};
use std::io::Cursor;

const INDEX: &str = "<html><head><title>powerfox exporter</title></head><body><h1>powerfox exporter</h1><p><a href=\"/metrics\">Metrics</a></p></body></html>";

impl<'r> Responder<'r, 'static> for metrics::Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let error = format!(
            "<html><body><h3>500 Internal Server Error</h3><code>{}</code></body></html>",
            self
        );
        Response::build()
            .status(Status::InternalServerError)
            .sized_body(error.len(), Cursor::new(error))
            .header(ContentType::new("text", "html"))
            .ok()
    }
}

#[get("/")]
fn index_route() -> RawHtml<&'static str> {
    RawHtml(INDEX)
}

#[get("/metrics")]
fn metrics_route(registry: &State<Registry>) -> Result<String, metrics::Error> {
    metrics::read(registry)
}

/// Metrics server listening on `address`:`port`, serving the gauges of `registry`.
pub fn build(address: &str, port: u16, registry: Registry) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port));

    rocket::custom(figment)
        .manage(registry)
        .mount("/", routes![index_route, metrics_route])
}
