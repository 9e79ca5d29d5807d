//! Inventory Snapshot Assembly
//!
//! Builds one self-consistent view of the controller by issuing a fixed, serial sequence
//! of API calls:
//!
//! 1. `controller`
//! 2. `system/inventory`, sorted by zone name
//! 3. `query/ap`, sorted by device name
//! 4. `query/wlan`, sorted by WLAN name
//! 5. for each WLAN whose SSID is in the detail allow-list, its detail record and, when it
//!    references a custom schedule, the schedule record
//!
//! Any failed call aborts the snapshot; partial snapshots are never returned.

use crate::config::MetricsConfig;
use crate::error::Result;
use crate::smartzone::types::{
    ApRecord, ControllerRecord, ScheduleRecord, WlanDetailRecord, WlanRecord, ZoneRecord,
};
use crate::smartzone::{Session, SmartZoneClient};
use tracing::debug;

/// Everything one collection cycle exports
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub controllers: Vec<ControllerRecord>,
    pub zones: Vec<ZoneRecord>,
    pub aps: Vec<ApRecord>,
    pub wlans: Vec<WlanEntry>,
}

/// A WLAN and, when its SSID is allow-listed, its detail lookups
#[derive(Debug, Clone, Default)]
pub struct WlanEntry {
    pub wlan: WlanRecord,
    pub detail: Option<WlanDetails>,
}

#[derive(Debug, Clone, Default)]
pub struct WlanDetails {
    pub record: WlanDetailRecord,
    /// Present only when the WLAN references a custom schedule with a concrete id
    pub schedule: Option<ScheduleRecord>,
}

impl Snapshot {
    /// Apply the stable output ordering (zones by name, APs by device name, WLANs by name)
    pub fn sort(&mut self) {
        self.zones.sort_by(|a, b| a.zone_name.cmp(&b.zone_name));
        self.aps.sort_by(|a, b| a.device_name.cmp(&b.device_name));
        self.wlans.sort_by(|a, b| a.wlan.name.cmp(&b.wlan.name));
    }
}

/// True when detail lookups are configured for this WLAN's SSID
pub fn wants_details(wlan: &WlanRecord, config: &MetricsConfig) -> bool {
    wlan.ssid
        .as_deref()
        .is_some_and(|ssid| config.wlan_details.iter().any(|allowed| allowed == ssid))
}

/// Fetch a complete snapshot.
///
/// # Errors
///
/// Propagates the first error from any fetch; no partial snapshot is produced.
pub async fn assemble_snapshot(
    client: &SmartZoneClient,
    session: &Session,
    config: &MetricsConfig,
) -> Result<Snapshot> {
    let controllers = client.query_controllers(session).await?;
    let zones = client.query_zone_inventory(session).await?;
    let aps = client.query_aps(session).await?;
    let wlans = client.query_wlans(session).await?;

    debug!(
        "Inventory: {} controllers, {} zones, {} APs, {} WLANs",
        controllers.len(),
        zones.len(),
        aps.len(),
        wlans.len()
    );

    let mut snapshot = Snapshot {
        controllers,
        zones,
        aps,
        wlans: wlans
            .into_iter()
            .map(|wlan| WlanEntry { wlan, detail: None })
            .collect(),
    };
    snapshot.sort();

    for entry in &mut snapshot.wlans {
        if !wants_details(&entry.wlan, config) {
            continue;
        }
        entry.detail = fetch_details(client, session, &entry.wlan).await?;
    }

    Ok(snapshot)
}

async fn fetch_details(
    client: &SmartZoneClient,
    session: &Session,
    wlan: &WlanRecord,
) -> Result<Option<WlanDetails>> {
    let (Some(zone_id), Some(wlan_id)) = (wlan.zone_id.as_deref(), wlan.wlan_id.as_deref()) else {
        debug!(
            "Skipping details for WLAN {:?}: missing zone or WLAN id",
            wlan.name
        );
        return Ok(None);
    };

    let record = client.query_wlan_detail(session, zone_id, wlan_id).await?;

    let schedule = match record
        .schedule
        .as_ref()
        .and_then(|schedule| schedule.custom_schedule_id())
    {
        Some(schedule_id) => Some(client.query_schedule(session, zone_id, schedule_id).await?),
        None => None,
    };

    Ok(Some(WlanDetails { record, schedule }))
}
