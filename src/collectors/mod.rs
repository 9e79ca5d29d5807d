//! Metric Materializers
//!
//! This module turns an assembled [`Snapshot`] into metric families. Each submodule
//! covers one record type and owns the names, help texts and label schemas of its
//! families, which are part of the exporter's external contract.
//!
//! # Architecture
//!
//! Materializers follow a consistent pattern:
//! - Take a slice of typed records, already in output order
//! - Create their families with fixed label schemas
//! - Append one or more samples per record, substituting documented defaults for absent
//!   fields
//! - Return the families in a fixed order
//!
//! No I/O happens here: the same snapshot always yields the same families, samples and
//! label order.

use crate::inventory::Snapshot;
use crate::metrics::MetricFamily;

pub mod ap;
pub mod controller;
pub mod wlan;
pub mod zone;

pub use ap::ap_metrics;
pub use controller::controller_metrics;
pub use wlan::{wlan_detail_metrics, wlan_metrics};
pub use zone::zone_metrics;

/// Label value used for absent text fields
pub const MISSING_LABEL: &str = "None";

/// Label value for an optional text field
pub(crate) fn label(value: &Option<String>) -> String {
    value.as_deref().unwrap_or(MISSING_LABEL).to_string()
}

/// Sample value for an optional numeric field; absent fields export as 0
pub(crate) fn value_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// `api_compatibility_info{compatible="True"|"False"} 1`
pub fn api_compatibility_metric(compatible: bool) -> MetricFamily {
    let mut family = MetricFamily::info(
        "api_compatibility_info",
        "Compatibility with exporter and controller",
        &["compatible"],
    );
    let value = if compatible { "True" } else { "False" };
    family.add_sample(vec![value.to_string()], 1.0);
    family
}

/// Materialize every family for one snapshot
pub fn materialize(snapshot: &Snapshot, api_compatible: bool) -> Vec<MetricFamily> {
    let mut families = vec![api_compatibility_metric(api_compatible)];
    families.extend(controller_metrics(&snapshot.controllers));
    families.extend(zone_metrics(&snapshot.zones));
    families.extend(ap_metrics(&snapshot.aps));
    families.extend(wlan_metrics(&snapshot.wlans));
    families.extend(wlan_detail_metrics(&snapshot.wlans));
    families
}
