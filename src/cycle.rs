//! Collection Cycle
//!
//! One scrape of `/metrics` runs exactly one cycle:
//!
//! 1. Open a service ticket session
//! 2. Assemble the inventory snapshot (strictly serial API calls)
//! 3. Log the session off, whatever the outcome of step 2
//! 4. Materialize the snapshot into metric families
//!
//! Families are only returned when every step succeeded. Nothing is kept between cycles, so
//! concurrent scrapes are independent.

use crate::collectors;
use crate::config::MetricsConfig;
use crate::error::Result;
use crate::inventory::assemble_snapshot;
use crate::metrics::MetricFamily;
use crate::smartzone::SmartZoneClient;
use std::time::Instant;
use tracing::{debug, info};

/// Run one collection cycle against the controller.
///
/// # Errors
///
/// Returns the first authentication, transport, HTTP status or decoding error. No families
/// are produced in that case.
pub async fn collect(client: &SmartZoneClient, config: &MetricsConfig) -> Result<Vec<MetricFamily>> {
    let started = Instant::now();

    let session = client.authenticate().await?;
    let api_compatible = session.api_compatible();

    let snapshot = assemble_snapshot(client, &session, config).await;
    client.logout(session).await;
    let snapshot = snapshot?;

    let families = collectors::materialize(&snapshot, api_compatible);
    let samples: usize = families.iter().map(|family| family.samples().len()).sum();

    debug!(
        "Snapshot: {} zones, {} APs, {} WLANs",
        snapshot.zones.len(),
        snapshot.aps.len(),
        snapshot.wlans.len()
    );
    info!(
        "Collected {} families ({} samples) in {:?}",
        families.len(),
        samples,
        started.elapsed()
    );

    Ok(families)
}
