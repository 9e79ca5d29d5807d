use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub smartzone: SmartZoneConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmartZoneConfig {
    /// Controller base URL, e.g. `https://smartzone.example.com:8443`
    pub target: String,
    pub username: String,
    pub password: SecretString,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    /// API version path segment this exporter is written against
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Page size posted to `query/*` listing endpoints. Only the first page is
    /// requested, so inventories larger than this are truncated.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Per-request timeout. Unset means the transport default (none).
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricsConfig {
    /// SSIDs whose passphrase and schedule details are exported
    #[serde(default)]
    pub wlan_details: Vec<String>,
}

/// Values supplied on the command line or through the legacy environment
/// variables. They take precedence over the file and prefixed environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub target: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_ssl: Option<bool>,
    pub wlan_details: Option<Vec<String>>,
    pub addr: Option<String>,
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9345
}

fn default_verify_ssl() -> bool {
    true
}

fn default_api_version() -> String {
    "v11_1".to_string()
}

fn default_page_limit() -> u32 {
    1000
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_overrides(path, Overrides::default())
    }

    pub fn load_with_overrides(path: &str, overrides: Overrides) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SMARTZONE_EXPORTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("metrics.wlan_details")
                    .try_parsing(true),
            )
            .set_override_option("smartzone.target", overrides.target)?
            .set_override_option("smartzone.username", overrides.username)?
            .set_override_option("smartzone.password", overrides.password)?
            .set_override_option("smartzone.verify_ssl", overrides.verify_ssl)?
            .set_override_option("metrics.wlan_details", overrides.wlan_details)?
            .set_override_option("server.addr", overrides.addr)?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .build()
            .context("Failed to build configuration")?;

        let mut config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.normalize();
        Ok(config)
    }

    /// Parse configuration from TOML text, ignoring files and environment.
    pub fn load_from_str(toml: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        let mut config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.smartzone.target = self.smartzone.target.trim_end_matches('/').to_string();
        self.metrics.wlan_details = self
            .metrics
            .wlan_details
            .iter()
            .map(|ssid| ssid.trim().to_string())
            .filter(|ssid| !ssid.is_empty())
            .collect();
    }

    pub fn validate(&self) -> Result<()> {
        let target = &self.smartzone.target;
        anyhow::ensure!(!target.is_empty(), "smartzone.target must not be empty");
        anyhow::ensure!(
            target.starts_with("http://") || target.starts_with("https://"),
            "smartzone.target must start with http:// or https:// (got {})",
            target
        );
        anyhow::ensure!(
            !self.smartzone.username.is_empty(),
            "smartzone.username must not be empty"
        );
        anyhow::ensure!(
            !self.smartzone.api_version.is_empty(),
            "smartzone.api_version must not be empty"
        );
        anyhow::ensure!(
            self.smartzone.page_limit > 0,
            "smartzone.page_limit must be > 0"
        );
        anyhow::ensure!(self.server.port > 0, "server.port must be > 0");
        Ok(())
    }
}

impl SmartZoneConfig {
    /// URL of the unversioned API information endpoint
    pub fn api_info_url(&self) -> String {
        format!("{}/wsg/api/public/apiInfo", self.target)
    }

    /// URL of a resource under the pinned API version
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/wsg/api/public/{}/{}",
            self.target,
            self.api_version,
            path.trim_start_matches('/')
        )
    }
}
