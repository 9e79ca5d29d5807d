//! Controller Metrics
//!
//! # Metrics Produced
//! - `smartzone_controller_uptime_seconds_total` - Controller uptime (counter)
//!   - Labels: id
//! - `smartzone_controller_model`, `smartzone_controller_serial_number`,
//!   `smartzone_controller_hostname`, `smartzone_controller_version`,
//!   `smartzone_controller_ap_firmware_version` - string facts, value is always 1
//!   - Labels: id, plus the fact itself

use super::{label, value_or_zero};
use crate::metrics::MetricFamily;
use crate::smartzone::types::ControllerRecord;

pub fn controller_metrics(controllers: &[ControllerRecord]) -> Vec<MetricFamily> {
    let mut model = MetricFamily::gauge(
        "smartzone_controller_model",
        "SmartZone controller model",
        &["id", "model"],
    );
    let mut serial_number = MetricFamily::gauge(
        "smartzone_controller_serial_number",
        "SmartZone controller serial number",
        &["id", "serialNumber"],
    );
    let mut uptime = MetricFamily::counter(
        "smartzone_controller_uptime_seconds_total",
        "Controller uptime in seconds",
        &["id"],
    );
    let mut host_name = MetricFamily::gauge(
        "smartzone_controller_hostname",
        "Controller hostname",
        &["id", "hostName"],
    );
    let mut version = MetricFamily::gauge(
        "smartzone_controller_version",
        "Controller version",
        &["id", "version"],
    );
    let mut ap_version = MetricFamily::gauge(
        "smartzone_controller_ap_firmware_version",
        "Firmware version on controller APs",
        &["id", "apVersion"],
    );

    for controller in controllers {
        let id = label(&controller.id);

        model.add_sample(vec![id.clone(), label(&controller.model)], 1.0);
        serial_number.add_sample(vec![id.clone(), label(&controller.serial_number)], 1.0);
        uptime.add_sample(vec![id.clone()], value_or_zero(controller.uptime_in_sec));
        host_name.add_sample(vec![id.clone(), label(&controller.host_name)], 1.0);
        version.add_sample(vec![id.clone(), label(&controller.version)], 1.0);
        ap_version.add_sample(vec![id, label(&controller.ap_version)], 1.0);
    }

    vec![model, serial_number, uptime, host_name, version, ap_version]
}
