use anyhow::Result;
use clap::Parser;
use smartzone_exporter::{
    config::{Config, Overrides},
    server,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// SmartZone controller URL, e.g. https://smartzone.example.com:8443 (overrides config)
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

    /// Comma-separated SSIDs whose passphrase and schedule are exported
    #[arg(long, env = "WLAN_DETAILS", value_delimiter = ',')]
    wlan_details: Option<Vec<String>>,

    /// Port to listen on for metrics
    #[arg(short, long, env = "EXPORTER_PORT")]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long, env = "EXPORTER_ADDR")]
    addr: Option<String>,
}

impl Args {
    fn overrides(self) -> Overrides {
        Overrides {
            target: self.target,
            username: self.user,
            password: self.password,
            verify_ssl: self.insecure.then_some(false),
            wlan_details: self.wlan_details,
            addr: self.addr,
            port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting SmartZone Prometheus Exporter v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config_path = args.config.clone();

    let config = Config::load_with_overrides(&config_path, args.overrides())?;
    config.validate()?;

    info!("Configuration loaded successfully");
    info!("SmartZone target: {}", config.smartzone.target);
    if !config.metrics.wlan_details.is_empty() {
        info!(
            "WLAN details enabled for: {}",
            config.metrics.wlan_details.join(", ")
        );
    }
    info!(
        "Metrics endpoint: http://{}:{}/metrics",
        config.server.addr, config.server.port
    );

    if let Err(e) = server::start(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
