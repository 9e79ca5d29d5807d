//! Configuration Record Comparison
//!
//! Structural comparison of two JSON configuration records, as returned by the SmartZone
//! API for zones and WLANs. Objects are walked recursively and every difference is reported
//! with its dotted path (e.g. `encryption.method`). Paths listed in the ignore set are
//! skipped entirely, including their subtrees.
//!
//! Used by the `smartzone-compare` binary.

use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Paths that always differ between two otherwise identical records (identifiers,
/// timestamps and references to per-zone objects)
pub const DEFAULT_IGNORED_PATHS: &[&str] = &[
    "id",
    "zoneId",
    "wlanId",
    "createdTime",
    "lastModifiedTime",
    "schedule.id",
    "firewallProfileId",
    "portalServiceProfile.id",
    "scheduler_config.id",
    "scheduler_config.zoneId",
    "schedule.name",
    "portalServiceProfile.name",
    "portal_config.id",
    "portal_config.zoneId",
];

/// [`DEFAULT_IGNORED_PATHS`] as an owned set
pub fn default_ignored_paths() -> HashSet<String> {
    DEFAULT_IGNORED_PATHS.iter().map(|p| p.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    /// Key present only in the baseline record
    OnlyInBaseline { path: String },
    /// Key present only in the compared record
    OnlyInOther { path: String },
    /// Key present in both with different values
    Changed {
        path: String,
        baseline: Value,
        other: Value,
    },
}

impl Difference {
    pub fn path(&self) -> &str {
        match self {
            Difference::OnlyInBaseline { path }
            | Difference::OnlyInOther { path }
            | Difference::Changed { path, .. } => path,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::OnlyInBaseline { path } => write!(f, "{} - only in baseline", path),
            Difference::OnlyInOther { path } => write!(f, "{} - only in compared", path),
            Difference::Changed {
                path,
                baseline,
                other,
            } => write!(f, "{} - {} != {}", path, baseline, other),
        }
    }
}

/// Compare two records.
///
/// Baseline keys are reported first, in the order the record lists them, followed by keys
/// that exist only in `other`. Two non-object roots are compared as a single value at path `""`.
pub fn compare(baseline: &Value, other: &Value, ignored: &HashSet<String>) -> Vec<Difference> {
    let mut differences = Vec::new();
    match (baseline, other) {
        (Value::Object(baseline), Value::Object(other)) => {
            compare_objects(baseline, other, "", ignored, &mut differences)
        }
        _ if baseline != other => differences.push(Difference::Changed {
            path: String::new(),
            baseline: baseline.clone(),
            other: other.clone(),
        }),
        _ => {}
    }
    differences
}

fn compare_objects(
    baseline: &Map<String, Value>,
    other: &Map<String, Value>,
    prefix: &str,
    ignored: &HashSet<String>,
    differences: &mut Vec<Difference>,
) {
    for (key, baseline_value) in baseline {
        let path = join_path(prefix, key);
        if ignored.contains(&path) {
            continue;
        }

        match (baseline_value, other.get(key)) {
            (_, None) => differences.push(Difference::OnlyInBaseline { path }),
            (Value::Object(baseline_object), Some(Value::Object(other_object))) => {
                compare_objects(baseline_object, other_object, &path, ignored, differences)
            }
            (baseline_value, Some(other_value)) if baseline_value != other_value => {
                differences.push(Difference::Changed {
                    path,
                    baseline: baseline_value.clone(),
                    other: other_value.clone(),
                })
            }
            _ => {}
        }
    }

    for key in other.keys() {
        let path = join_path(prefix, key);
        if ignored.contains(&path) || baseline.contains_key(key) {
            continue;
        }
        differences.push(Difference::OnlyInOther { path });
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
