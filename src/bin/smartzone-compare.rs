//! Compare two zone or WLAN configurations on a SmartZone controller.
//!
//! ```text
//! smartzone-compare -z <zone1> <zone2>
//! smartzone-compare <zone1> <ssid1> <zone2> <ssid2>
//! ```
//!
//! The first record is the baseline. Identifier and timestamp fields are ignored.

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::Value;
use smartzone_exporter::{
    config::{Config, Overrides},
    diff,
    error::ExporterError,
    smartzone::{Session, SmartZoneClient},
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// SmartZone controller URL (overrides config)
    #[arg(short, long, env = "SMARTZONE_TARGET")]
    target: Option<String>,

    /// SmartZone API user (overrides config)
    #[arg(long, env = "API_USER")]
    user: Option<String>,

    /// SmartZone API password (overrides config)
    #[arg(long, env = "API_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Compare zone configurations instead of WLANs
    #[arg(short = 'z', long = "zones")]
    zones: bool,

    /// `<zone1> <zone2>` with -z, otherwise `<zone1> <ssid1> <zone2> <ssid2>`
    #[arg(required = true)]
    names: Vec<String>,
}

/// What to compare, resolved from the positional arguments
enum Target {
    Zone { zone: String },
    Wlan { zone: String, ssid: String },
}

impl Target {
    fn label(&self) -> String {
        match self {
            Target::Zone { zone } => zone.clone(),
            Target::Wlan { zone, ssid } => format!("{}/{}", zone, ssid),
        }
    }
}

fn parse_targets(zones_mode: bool, names: &[String]) -> Result<(Target, Target)> {
    match (zones_mode, names) {
        (true, [zone1, zone2]) => Ok((
            Target::Zone {
                zone: zone1.clone(),
            },
            Target::Zone {
                zone: zone2.clone(),
            },
        )),
        (false, [zone1, ssid1, zone2, ssid2]) => Ok((
            Target::Wlan {
                zone: zone1.clone(),
                ssid: ssid1.clone(),
            },
            Target::Wlan {
                zone: zone2.clone(),
                ssid: ssid2.clone(),
            },
        )),
        _ => bail!(
            "usage: smartzone-compare <zone1> <ssid1> <zone2> <ssid2>\n   or: smartzone-compare -z <zone1> <zone2>"
        ),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("Comparison failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let (baseline, other) = parse_targets(args.zones, &args.names)?;

    let overrides = Overrides {
        target: args.target,
        username: args.user,
        password: args.password,
        verify_ssl: args.insecure.then_some(false),
        ..Overrides::default()
    };
    let config = Config::load_with_overrides(&args.config, overrides)?;
    config.validate()?;

    let client = SmartZoneClient::new(config.smartzone)?;
    let session = client.authenticate().await?;
    let result = fetch_pair(&client, &session, &baseline, &other).await;
    client.logout(session).await;
    let (baseline_config, other_config) = result?;

    println!(
        "\nComparing baseline '{}' with '{}':\n",
        baseline.label(),
        other.label()
    );
    let differences = diff::compare(
        &baseline_config,
        &other_config,
        &diff::default_ignored_paths(),
    );
    if differences.is_empty() {
        println!("The configurations are identical.");
    } else {
        for difference in &differences {
            println!(" - {}", difference);
        }
    }
    println!();

    Ok(())
}

async fn fetch_pair(
    client: &SmartZoneClient,
    session: &Session,
    baseline: &Target,
    other: &Target,
) -> Result<(Value, Value)> {
    let zones = client.query_zone_inventory(session).await?;
    let zone_id = |name: &str| -> Result<String> {
        zones
            .iter()
            .find(|zone| zone.zone_name.as_deref() == Some(name))
            .and_then(|zone| zone.zone_id.clone())
            .ok_or_else(|| ExporterError::NotFound(format!("zone '{}'", name)).into())
    };

    let baseline_zone = zone_id(target_zone(baseline))?;
    let other_zone = zone_id(target_zone(other))?;

    println!("Fetching configuration of '{}'...", baseline.label());
    let baseline_config = fetch_config(client, session, baseline, &baseline_zone).await?;
    println!("Fetching configuration of '{}'...", other.label());
    let other_config = fetch_config(client, session, other, &other_zone).await?;

    Ok((baseline_config, other_config))
}

fn target_zone(target: &Target) -> &str {
    match target {
        Target::Zone { zone } | Target::Wlan { zone, .. } => zone,
    }
}

async fn fetch_config(
    client: &SmartZoneClient,
    session: &Session,
    target: &Target,
    zone_id: &str,
) -> Result<Value> {
    match target {
        Target::Zone { .. } => Ok(client.query_zone_config(session, zone_id).await?),
        Target::Wlan { zone, ssid } => {
            let wlans = client.query_zone_wlans(session, zone_id).await?;
            let wlan_id = wlans
                .iter()
                .find(|wlan| wlan.ssid.as_deref() == Some(ssid.as_str()))
                .and_then(|wlan| wlan.id.clone())
                .ok_or_else(|| {
                    ExporterError::NotFound(format!("SSID '{}' in zone '{}'", ssid, zone))
                })?;

            let mut config = client.query_wlan_config(session, zone_id, &wlan_id).await?;
            enrich_wlan_config(client, session, zone_id, &mut config).await?;
            Ok(config)
        }
    }
}

/// Attach the referenced schedule and hotspot portal so they take part in the comparison
async fn enrich_wlan_config(
    client: &SmartZoneClient,
    session: &Session,
    zone_id: &str,
    config: &mut Value,
) -> Result<()> {
    let schedule_id = config
        .pointer("/schedule/id")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(schedule_id) = schedule_id {
        let schedule = client
            .query_schedule_config(session, zone_id, &schedule_id)
            .await?;
        insert(config, "scheduler_config", schedule);
    }

    let portal_id = config
        .pointer("/portalServiceProfile/id")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(portal_id) = portal_id {
        let portal = client
            .query_hotspot_portal(session, zone_id, &portal_id)
            .await?;
        insert(config, "portal_config", portal);
    }

    Ok(())
}

fn insert(config: &mut Value, key: &str, value: Value) {
    if let Value::Object(map) = config {
        map.insert(key.to_string(), value);
    }
}
