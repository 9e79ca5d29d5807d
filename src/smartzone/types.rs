//! SmartZone API Type Definitions
//!
//! Typed records for the responses of the SmartZone public REST API.
//!
//! # Design Notes
//!
//! - **Optional Fields**: the controller omits fields or returns `null` depending on
//!   firmware and device state, so almost every field is `Option<T>`.
//! - **Lenient Decoding**: numeric fields go through [`lenient_number`] (numbers, booleans
//!   and numeric strings are accepted) and identifier and label text fields through
//!   [`lenient_text`] (strings, numbers and booleans). Anything else decodes as absent instead of failing the scrape.
//!
//! # API Endpoints Covered
//!
//! - `apiInfo` → [`ApiInfo`]
//! - `serviceTicket` → [`TicketRequest`], [`TicketResponse`]
//! - `controller` → [`ListResponse`]<[`ControllerRecord`]>
//! - `system/inventory` → [`ListResponse`]<[`ZoneRecord`]>
//! - `query/ap` → [`ListResponse`]<[`ApRecord`]>
//! - `query/wlan` → [`ListResponse`]<[`WlanRecord`]>
//! - `rkszones/{zoneId}/wlans` → [`ListResponse`]<[`ZoneWlanSummary`]>
//! - `rkszones/{zoneId}/wlans/{wlanId}` → [`WlanDetailRecord`]
//! - `rkszones/{zoneId}/wlanSchedulers/{id}` → [`ScheduleRecord`]

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder used for both coordinates when an AP has no usable GPS position
pub const GPS_UNAVAILABLE: &str = "none";

/// Legacy sentinel some firmwares return instead of a null schedule id
const SCHEDULE_ID_SENTINEL: &str = "none";

/// Decode a JSON value into a number: numbers as-is, booleans as 0/1, numeric strings parsed.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserializer for optional numeric fields, see [`numeric_value`]
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric_value))
}

/// Deserializer for identifier and label fields that may arrive as strings, numbers or booleans
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Response of `GET /wsg/api/public/apiInfo`
#[derive(Debug, Deserialize, Default)]
pub struct ApiInfo {
    #[serde(rename = "apiSupportVersions", default)]
    pub api_support_versions: Vec<String>,
}

impl ApiInfo {
    /// True when any advertised version string contains `api_version`
    pub fn supports(&self, api_version: &str) -> bool {
        self.api_support_versions
            .iter()
            .any(|v| v.contains(api_version))
    }
}

/// Body of `POST serviceTicket`
#[derive(Debug, Serialize)]
pub struct TicketRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST serviceTicket`
#[derive(Debug, Deserialize)]
pub struct TicketResponse {
    #[serde(rename = "serviceTicket", default)]
    pub service_ticket: Option<String>,
    #[serde(rename = "controllerVersion", default)]
    pub controller_version: Option<String>,
}

/// Pagination envelope posted to `query/*` endpoints
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Listing envelope shared by every collection endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> ListResponse<T> {
    /// True when the controller reports more entries than were returned
    pub fn is_truncated(&self) -> bool {
        self.has_more == Some(true)
            || self
                .total_count
                .is_some_and(|total| total > self.list.len() as u64)
    }
}

/// Controller node from `controller`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ControllerRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(rename = "serialNumber", default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    #[serde(rename = "uptimeInSec", default, deserialize_with = "lenient_number")]
    pub uptime_in_sec: Option<f64>,
    #[serde(rename = "hostName", default, deserialize_with = "lenient_text")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub version: Option<String>,
    #[serde(rename = "apVersion", default, deserialize_with = "lenient_text")]
    pub ap_version: Option<String>,
}

/// Per-zone AP and client counters from `system/inventory`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZoneRecord {
    #[serde(rename = "zoneId", default, deserialize_with = "lenient_text")]
    pub zone_id: Option<String>,
    #[serde(rename = "zoneName", default, deserialize_with = "lenient_text")]
    pub zone_name: Option<String>,
    #[serde(rename = "totalAPs", default, deserialize_with = "lenient_number")]
    pub total_aps: Option<f64>,
    #[serde(rename = "discoveryAPs", default, deserialize_with = "lenient_number")]
    pub discovery_aps: Option<f64>,
    #[serde(rename = "connectedAPs", default, deserialize_with = "lenient_number")]
    pub connected_aps: Option<f64>,
    #[serde(rename = "disconnectedAPs", default, deserialize_with = "lenient_number")]
    pub disconnected_aps: Option<f64>,
    #[serde(rename = "rebootingAPs", default, deserialize_with = "lenient_number")]
    pub rebooting_aps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub clients: Option<f64>,
}

/// Access point from `query/ap`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApRecord {
    #[serde(rename = "apMac", default, deserialize_with = "lenient_text")]
    pub ap_mac: Option<String>,
    #[serde(rename = "deviceName", default, deserialize_with = "lenient_text")]
    pub device_name: Option<String>,
    #[serde(rename = "zoneName", default, deserialize_with = "lenient_text")]
    pub zone_name: Option<String>,
    #[serde(rename = "apGroupName", default, deserialize_with = "lenient_text")]
    pub ap_group_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub alerts: Option<f64>,
    #[serde(rename = "latency24G", default, deserialize_with = "lenient_number")]
    pub latency_24g: Option<f64>,
    #[serde(rename = "latency50G", default, deserialize_with = "lenient_number")]
    pub latency_5g: Option<f64>,
    #[serde(rename = "latency6G", default, deserialize_with = "lenient_number")]
    pub latency_6g: Option<f64>,
    #[serde(rename = "numClients24G", default, deserialize_with = "lenient_number")]
    pub num_clients_24g: Option<f64>,
    #[serde(rename = "numClients5G", default, deserialize_with = "lenient_number")]
    pub num_clients_5g: Option<f64>,
    #[serde(rename = "numClients6G", default, deserialize_with = "lenient_number")]
    pub num_clients_6g: Option<f64>,
    #[serde(rename = "deviceGps", default, deserialize_with = "lenient_text")]
    pub device_gps: Option<String>,
}

impl ApRecord {
    pub fn status(&self) -> ApStatus {
        ApStatus::parse(self.status.as_deref())
    }

    pub fn gps(&self) -> GpsCoordinate {
        GpsCoordinate::parse(self.device_gps.as_deref())
    }
}

/// AP connection state as reported by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApStatus {
    Online,
    Offline,
    Flagged,
    /// Anything else, including a missing status
    Other(String),
}

impl ApStatus {
    /// The states exported as indicator samples, in label order
    pub const INDICATORS: [ApStatus; 3] = [ApStatus::Online, ApStatus::Offline, ApStatus::Flagged];

    pub fn parse(status: Option<&str>) -> Self {
        match status {
            Some("Online") => ApStatus::Online,
            Some("Offline") => ApStatus::Offline,
            Some("Flagged") => ApStatus::Flagged,
            Some(other) => ApStatus::Other(other.to_string()),
            None => ApStatus::Other(String::new()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ApStatus::Online => "Online",
            ApStatus::Offline => "Offline",
            ApStatus::Flagged => "Flagged",
            ApStatus::Other(s) => s,
        }
    }
}

/// Parsed `deviceGps` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpsCoordinate {
    Available { lat: String, long: String },
    Unavailable,
}

impl GpsCoordinate {
    /// Accepts exactly two non-empty comma-separated components, e.g. `"1.0,2.0"`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return GpsCoordinate::Unavailable;
        };
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [lat, long] if !lat.is_empty() && !long.is_empty() => GpsCoordinate::Available {
                lat: lat.to_string(),
                long: long.to_string(),
            },
            _ => GpsCoordinate::Unavailable,
        }
    }

    /// `(lat, long)` label values, with [`GPS_UNAVAILABLE`] for both when unavailable
    pub fn labels(&self) -> (&str, &str) {
        match self {
            GpsCoordinate::Available { lat, long } => (lat, long),
            GpsCoordinate::Unavailable => (GPS_UNAVAILABLE, GPS_UNAVAILABLE),
        }
    }
}

/// WLAN from `query/wlan`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WlanRecord {
    #[serde(rename = "wlanId", default, deserialize_with = "lenient_text")]
    pub wlan_id: Option<String>,
    #[serde(rename = "zoneId", default, deserialize_with = "lenient_text")]
    pub zone_id: Option<String>,
    #[serde(rename = "zoneName", default, deserialize_with = "lenient_text")]
    pub zone_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ssid: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub alerts: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub clients: Option<f64>,
}

/// WLAN entry from the per-zone listing `rkszones/{zoneId}/wlans`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZoneWlanSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ssid: Option<String>,
}

/// Subset of `rkszones/{zoneId}/wlans/{wlanId}` used by the exporter
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WlanDetailRecord {
    #[serde(default)]
    pub encryption: Option<Encryption>,
    #[serde(default)]
    pub schedule: Option<ScheduleRef>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Encryption {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl Encryption {
    /// The passphrase, when the WLAN uses WPA2 and carries one
    pub fn wpa2_passphrase(&self) -> Option<&str> {
        match (self.method.as_deref(), self.passphrase.as_deref()) {
            (Some("WPA2"), Some(passphrase)) if !passphrase.is_empty() => Some(passphrase),
            _ => None,
        }
    }
}

/// Schedule reference embedded in a WLAN detail record
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleRef {
    #[serde(rename = "type", default)]
    pub schedule_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    AlwaysOn,
    AlwaysOff,
    Custom,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::AlwaysOn => "AlwaysOn",
            ScheduleKind::AlwaysOff => "AlwaysOff",
            ScheduleKind::Custom => "Custom",
        }
    }
}

impl ScheduleRef {
    pub fn kind(&self) -> ScheduleKind {
        match self.schedule_type.as_deref() {
            Some("AlwaysOn") => ScheduleKind::AlwaysOn,
            Some("AlwaysOff") => ScheduleKind::AlwaysOff,
            _ => ScheduleKind::Custom,
        }
    }

    /// Concrete schedule id, treating empty values and the `"none"` sentinel as absent
    pub fn schedule_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && !id.eq_ignore_ascii_case(SCHEDULE_ID_SENTINEL))
    }

    /// Id of the schedule record to fetch, if any
    pub fn custom_schedule_id(&self) -> Option<&str> {
        match self.kind() {
            ScheduleKind::Custom => self.schedule_id(),
            _ => None,
        }
    }
}

/// WLAN schedule from `rkszones/{zoneId}/wlanSchedulers/{id}`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sun: Vec<String>,
    #[serde(default)]
    pub mon: Vec<String>,
    #[serde(default)]
    pub tue: Vec<String>,
    #[serde(default)]
    pub wed: Vec<String>,
    #[serde(default)]
    pub thu: Vec<String>,
    #[serde(default)]
    pub fri: Vec<String>,
    #[serde(default)]
    pub sat: Vec<String>,
}

impl ScheduleRecord {
    /// Time ranges per weekday, Sunday first
    pub fn days(&self) -> [&[String]; 7] {
        [
            self.sun.as_slice(),
            self.mon.as_slice(),
            self.tue.as_slice(),
            self.wed.as_slice(),
            self.thu.as_slice(),
            self.fri.as_slice(),
            self.sat.as_slice(),
        ]
    }
}
