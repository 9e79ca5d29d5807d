//! Zone Inventory Metrics
//!
//! # Metrics Produced
//! - `smartzone_zone_total_aps` - Total number of APs in zone
//! - `smartzone_zone_discovery_aps` - Number of zone APs in discovery state
//! - `smartzone_zone_connected_aps` - Number of connected zone APs
//! - `smartzone_zone_disconnected_aps` - Number of disconnected zone APs
//! - `smartzone_zone_rebooting_aps` - Number of zone APs in rebooting state
//! - `smartzone_zone_total_connected_clients` - Total number of connected clients in zone
//!
//! All labeled by zone_name, zone_id. Absent counters export as 0.

use super::{label, value_or_zero};
use crate::metrics::MetricFamily;
use crate::smartzone::types::ZoneRecord;

const ZONE_LABELS: &[&str] = &["zone_name", "zone_id"];

type ZoneField = fn(&ZoneRecord) -> Option<f64>;

pub fn zone_metrics(zones: &[ZoneRecord]) -> Vec<MetricFamily> {
    let fields: [(&'static str, &'static str, ZoneField); 6] = [
        (
            "smartzone_zone_total_aps",
            "Total number of APs in zone",
            |z| z.total_aps,
        ),
        (
            "smartzone_zone_discovery_aps",
            "Number of zone APs in discovery state",
            |z| z.discovery_aps,
        ),
        (
            "smartzone_zone_connected_aps",
            "Number of connected zone APs",
            |z| z.connected_aps,
        ),
        (
            "smartzone_zone_disconnected_aps",
            "Number of disconnected zone APs",
            |z| z.disconnected_aps,
        ),
        (
            "smartzone_zone_rebooting_aps",
            "Number of zone APs in rebooting state",
            |z| z.rebooting_aps,
        ),
        (
            "smartzone_zone_total_connected_clients",
            "Total number of connected clients in zone",
            |z| z.clients,
        ),
    ];

    fields
        .into_iter()
        .map(|(name, help, field)| {
            let mut family = MetricFamily::gauge(name, help, ZONE_LABELS);
            for zone in zones {
                family.add_sample(
                    vec![label(&zone.zone_name), label(&zone.zone_id)],
                    value_or_zero(field(zone)),
                );
            }
            family
        })
        .collect()
}
