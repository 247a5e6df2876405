use powerfox_exporter::poller::Poller;
use powerfox_exporter::{server, settings};
use std::process;

#[rocket::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOGLEVEL", "info"))
        .init();

    let settings = settings::read_settings().unwrap_or_else(|e| {
        log::error!("{}", e);
        process::exit(1);
    });

    let poller = Poller::initialize(settings.poller_config()).unwrap_or_else(|e| {
        log::error!("{}", e);
        process::exit(1);
    });

    let registry = poller.registry();
    tokio::spawn(poller.run());

    if let Err(e) = server::build(&settings.exporter_address, settings.exporter_port, registry)
        .launch()
        .await
    {
        log::error!("Metrics server failed: {}", e);
        process::exit(1);
    }
}
