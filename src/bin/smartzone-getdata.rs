//! Dump one SmartZone API resource as pretty-printed JSON.
//!
//! ```text
//! smartzone-getdata query/ap
//! smartzone-getdata rkszones/<zone-id>/wlans
//! ```
//!
//! Paths containing `query` are POSTed with the pagination envelope, everything else is a GET.

use anyhow::Result;
use clap::Parser;
use smartzone_exporter::{
    config::{Config, Overrides},
    smartzone::SmartZoneClient,
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

    /// Resource path below the versioned API root, e.g. `system/inventory`
    path: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("Fetch failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
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
    let document = client.fetch_document(&args.path).await?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
