//! WLAN Metrics
//!
//! # Metrics Produced
//! - `smartzone_wlan_alerts` - Number of WLAN alerts
//! - `smartzone_wlan_connected_clients` - Number of clients connected to this SSID
//!   - Labels: zone, name, ssid
//!
//! For WLANs whose SSID is allow-listed for details:
//! - `smartzone_wlan_details_passphrase` - WPA2 passphrase and a QR code URL, value 1
//!   - Labels: zone, name, ssid, passphrase, qrcode
//! - `smartzone_wlan_details_schedule` - Weekly schedule, value 0
//!   - Labels: zone, name, ssid, schedule_name, sun, mon, tue, wed, thu, fri, sat

use super::{label, value_or_zero};
use crate::inventory::{WlanDetails, WlanEntry};
use crate::metrics::MetricFamily;
use crate::smartzone::types::ScheduleKind;

const WLAN_LABELS: &[&str] = &["zone", "name", "ssid"];
const PASSPHRASE_LABELS: &[&str] = &["zone", "name", "ssid", "passphrase", "qrcode"];
const SCHEDULE_LABELS: &[&str] = &[
    "zone",
    "name",
    "ssid",
    "schedule_name",
    "sun",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
];

/// Placeholder for a day without time ranges
const NO_RANGES: &str = "-";

const QR_CODE_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=350x350&data=";

/// QR code image URL encoding a WPA network join string
///
/// The passphrase is form-encoded (spaces as `+`); the SSID is embedded as-is.
pub fn qr_code_url(ssid: &str, passphrase: &str) -> String {
    let passphrase = urlencoding::encode(passphrase).replace("%20", "+");
    format!("{}WIFI:T:WPA;S:{};P:{};;", QR_CODE_BASE, ssid, passphrase)
}

fn wlan_labels(entry: &WlanEntry) -> Vec<String> {
    vec![
        label(&entry.wlan.zone_name),
        label(&entry.wlan.name),
        label(&entry.wlan.ssid),
    ]
}

pub fn wlan_metrics(wlans: &[WlanEntry]) -> Vec<MetricFamily> {
    let mut alerts = MetricFamily::gauge(
        "smartzone_wlan_alerts",
        "Number of WLAN alerts",
        WLAN_LABELS,
    );
    let mut clients = MetricFamily::gauge(
        "smartzone_wlan_connected_clients",
        "Number of clients connected to this SSID",
        WLAN_LABELS,
    );

    for entry in wlans {
        let labels = wlan_labels(entry);
        alerts.add_sample(labels.clone(), value_or_zero(entry.wlan.alerts));
        clients.add_sample(labels, value_or_zero(entry.wlan.clients));
    }

    vec![alerts, clients]
}

pub fn wlan_detail_metrics(wlans: &[WlanEntry]) -> Vec<MetricFamily> {
    let mut passphrase = MetricFamily::gauge(
        "smartzone_wlan_details_passphrase",
        "WLAN details Passphrase",
        PASSPHRASE_LABELS,
    );
    let mut schedule = MetricFamily::gauge(
        "smartzone_wlan_details_schedule",
        "WLAN Details Schedule",
        SCHEDULE_LABELS,
    );

    for entry in wlans {
        let Some(details) = &entry.detail else {
            continue;
        };

        if let Some(secret) = details
            .record
            .encryption
            .as_ref()
            .and_then(|encryption| encryption.wpa2_passphrase())
        {
            let ssid = entry.wlan.ssid.as_deref().unwrap_or_default();
            let mut labels = wlan_labels(entry);
            labels.push(secret.to_string());
            labels.push(qr_code_url(ssid, secret));
            passphrase.add_sample(labels, 1.0);
        }

        if let Some(columns) = schedule_columns(details) {
            let mut labels = wlan_labels(entry);
            labels.extend(columns);
            schedule.add_sample(labels, 0.0);
        }
    }

    vec![passphrase, schedule]
}

/// `schedule_name` followed by one column per weekday, or `None` when the WLAN has no
/// exportable schedule
fn schedule_columns(details: &WlanDetails) -> Option<Vec<String>> {
    let reference = details.record.schedule.as_ref()?;

    match reference.kind() {
        kind @ (ScheduleKind::AlwaysOn | ScheduleKind::AlwaysOff) => {
            let mut columns = vec![kind.as_str().to_string()];
            columns.extend(std::iter::repeat(NO_RANGES.to_string()).take(7));
            Some(columns)
        }
        ScheduleKind::Custom => {
            let record = details.schedule.as_ref()?;
            let mut columns = vec![label(&record.name)];
            columns.extend(record.days().iter().map(|ranges| {
                if ranges.is_empty() {
                    NO_RANGES.to_string()
                } else {
                    ranges.join(",")
                }
            }));
            Some(columns)
        }
    }
}
