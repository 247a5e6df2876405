//! Prometheus exporter for the powerfox metering API.
//!
//! A [`poller::Poller`] fetches the current reading of one powerfox device on a fixed interval
//! and publishes it as gauges labeled with `device_id`:
//!
//! * `powerfox_device_consumption` - energy drawn from the grid, in kWh
//! * `powerfox_device_feedin` - energy fed into the grid, in kWh
//! * `powerfox_device_power` - current power, in W
//! * `powerfox_device_outdated` - `1` if powerfox reports the reading as outdated
//!
//! Failed fetches are logged and leave the gauges at their last value.

pub mod api;
pub mod metrics;
pub mod model;
pub mod poller;
pub mod server;
pub mod settings;
