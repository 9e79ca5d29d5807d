//! Access Point Metrics
//!
//! # Metrics Produced
//! - `smartzone_ap_alerts` - Number of AP alerts
//! - `smartzone_ap_latency_{24g,5g,6g}_milliseconds` - Per-band latency
//! - `smartzone_ap_connected_clients_{24g,5g,6g}` - Per-band client count
//!   - Labels: zone, ap_group, mac, name, lat, long
//! - `smartzone_ap_status` - One sample per state in [`ApStatus::INDICATORS`], 1 for the
//!   current state
//!   - Labels: zone, ap_group, mac, name, status, lat, long
//! - `smartzone_ap_model` - Always 1
//!   - Labels: zone, ap_group, mac, name, model, lat, long
//!
//! APs without a usable `deviceGps` get `none` for both coordinates.

use super::{label, value_or_zero};
use crate::metrics::MetricFamily;
use crate::smartzone::types::{ApRecord, ApStatus};

const AP_LABELS: &[&str] = &["zone", "ap_group", "mac", "name", "lat", "long"];
const STATUS_LABELS: &[&str] = &["zone", "ap_group", "mac", "name", "status", "lat", "long"];
const MODEL_LABELS: &[&str] = &["zone", "ap_group", "mac", "name", "model", "lat", "long"];

type ApField = fn(&ApRecord) -> Option<f64>;

/// Identity label values shared by every AP family
struct ApIdentity {
    zone: String,
    ap_group: String,
    mac: String,
    name: String,
    lat: String,
    long: String,
}

impl ApIdentity {
    fn of(ap: &ApRecord) -> Self {
        let gps = ap.gps();
        let (lat, long) = gps.labels();
        Self {
            zone: label(&ap.zone_name),
            ap_group: label(&ap.ap_group_name),
            mac: label(&ap.ap_mac),
            name: label(&ap.device_name),
            lat: lat.to_string(),
            long: long.to_string(),
        }
    }

    /// Label values with `extra` inserted before the coordinates
    fn labels(&self, extra: Option<&str>) -> Vec<String> {
        let mut values = vec![
            self.zone.clone(),
            self.ap_group.clone(),
            self.mac.clone(),
            self.name.clone(),
        ];
        if let Some(extra) = extra {
            values.push(extra.to_string());
        }
        values.push(self.lat.clone());
        values.push(self.long.clone());
        values
    }
}

pub fn ap_metrics(aps: &[ApRecord]) -> Vec<MetricFamily> {
    let fields: [(&'static str, &'static str, ApField); 7] = [
        ("smartzone_ap_alerts", "Number of AP alerts", |ap| ap.alerts),
        (
            "smartzone_ap_latency_24g_milliseconds",
            "AP latency on 2.4G channels in milliseconds",
            |ap| ap.latency_24g,
        ),
        (
            "smartzone_ap_latency_5g_milliseconds",
            "AP latency on 5G channels in milliseconds",
            |ap| ap.latency_5g,
        ),
        (
            "smartzone_ap_latency_6g_milliseconds",
            "AP latency on 6G channels in milliseconds",
            |ap| ap.latency_6g,
        ),
        (
            "smartzone_ap_connected_clients_24g",
            "Number of clients connected to 2.4G channels on this AP",
            |ap| ap.num_clients_24g,
        ),
        (
            "smartzone_ap_connected_clients_5g",
            "Number of clients connected to 5G channels on this AP",
            |ap| ap.num_clients_5g,
        ),
        (
            "smartzone_ap_connected_clients_6g",
            "Number of clients connected to 6G channels on this AP",
            |ap| ap.num_clients_6g,
        ),
    ];

    let identities: Vec<ApIdentity> = aps.iter().map(ApIdentity::of).collect();

    let mut families: Vec<MetricFamily> = fields
        .into_iter()
        .map(|(name, help, field)| {
            let mut family = MetricFamily::gauge(name, help, AP_LABELS);
            for (ap, identity) in aps.iter().zip(&identities) {
                family.add_sample(identity.labels(None), value_or_zero(field(ap)));
            }
            family
        })
        .collect();

    let mut status = MetricFamily::gauge("smartzone_ap_status", "AP status", STATUS_LABELS);
    let mut model = MetricFamily::gauge("smartzone_ap_model", "AP model", MODEL_LABELS);

    for (ap, identity) in aps.iter().zip(&identities) {
        let current = ap.status();
        for indicator in ApStatus::INDICATORS.iter() {
            let value = if *indicator == current { 1.0 } else { 0.0 };
            status.add_sample(identity.labels(Some(indicator.as_str())), value);
        }

        model.add_sample(identity.labels(Some(label(&ap.model).as_str())), 1.0);
    }

    families.push(status);
    families.push(model);
    families
}
