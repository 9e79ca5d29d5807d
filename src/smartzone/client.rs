//! SmartZone REST API Client
//!
//! This module provides a client for the Ruckus SmartZone public REST API
//! (`/wsg/api/public/{version}/...`).
//!
//! # Architecture
//!
//! - **Transport**: one `reqwest::Client` per process, shared across scrapes for connection
//!   pooling only. It holds no session state.
//! - **Authentication**: a service ticket per collection cycle, see [`SessionManager`]
//! - **Requests**: every call carries the ticket as the `serviceTicket` query parameter.
//!   Listing endpoints under `query/` are POSTed with a pagination envelope, everything
//!   else is a plain GET.
//!
//! # Example
//!
//! ```no_run
//! use smartzone_exporter::config::SmartZoneConfig;
//! use smartzone_exporter::smartzone::SmartZoneClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SmartZoneConfig {
//!     target: "https://smartzone.example.com:8443".to_string(),
//!     username: "monitor".to_string(),
//!     password: SecretString::new("secret".into()),
//!     verify_ssl: false,
//!     api_version: "v11_1".to_string(),
//!     page_limit: 1000,
//!     timeout_seconds: None,
//! };
//!
//! let client = SmartZoneClient::new(config)?;
//! let session = client.authenticate().await?;
//! let zones = client.query_zone_inventory(&session).await?;
//! client.logout(session).await;
//! # Ok(())
//! # }
//! ```

use crate::config::SmartZoneConfig;
use crate::error::{ExporterError, Result};
use crate::smartzone::session::{Session, SessionManager};
use crate::smartzone::types::*;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Path fragment that marks a paginated listing endpoint
const LISTING_MARKER: &str = "query";

/// How a resource path is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Authenticated GET
    Plain,
    /// Authenticated POST carrying `{page: 1, limit: page_limit}`
    Paginated,
}

impl QueryMode {
    /// Listing endpoints are recognised by the `query` marker in their path
    pub fn for_path(path: &str) -> Self {
        if path.contains(LISTING_MARKER) {
            QueryMode::Paginated
        } else {
            QueryMode::Plain
        }
    }
}

/// Client for the SmartZone public API
///
/// Cheap to share behind an `Arc`; concurrent scrapes each open their own [`Session`].
pub struct SmartZoneClient {
    config: Arc<SmartZoneConfig>,
    http: reqwest::Client,
    session_manager: SessionManager,
}

impl SmartZoneClient {
    pub fn new(config: SmartZoneConfig) -> Result<Self> {
        let config = Arc::new(config);

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("smartzone-exporter/", env!("CARGO_PKG_VERSION")));

        if !config.verify_ssl {
            // Warn once here instead of on every request
            warn!(
                "TLS certificate verification disabled; connection to {} may not be secure",
                config.target
            );
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let http = builder
            .build()
            .map_err(|e| ExporterError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let session_manager = SessionManager::new(config.clone(), http.clone());
        Ok(Self {
            config,
            http,
            session_manager,
        })
    }

    /// Open a new service ticket session
    pub async fn authenticate(&self) -> Result<Session> {
        self.session_manager.authenticate().await
    }

    /// Release a session's ticket (best effort)
    pub async fn logout(&self, session: Session) {
        self.session_manager.logout(session).await
    }

    /// Fetch a resource path and deserialize the response body.
    ///
    /// # Arguments
    ///
    /// * `session` - Session whose ticket authenticates the call
    /// * `path` - Resource path below the versioned API root, e.g. `system/inventory`
    /// * `mode` - Request shape, usually [`QueryMode::for_path`]
    ///
    /// # Errors
    ///
    /// - [`ExporterError::Resource`] on any non-success HTTP status (no retry)
    /// - [`ExporterError::Transport`] on connection failures
    /// - [`ExporterError::Json`] if the body does not match `T`
    pub async fn fetch<T>(&self, session: &Session, path: &str, mode: QueryMode) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        debug!("Fetching {} ({:?})", path, mode);

        let request = match mode {
            QueryMode::Plain => self.http.get(&url),
            QueryMode::Paginated => self.http.post(&url).json(&PageRequest {
                page: 1,
                limit: self.config.page_limit,
            }),
        };

        let response = request
            .query(&[("serviceTicket", session.ticket())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::Resource {
                path: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a resource path as untyped JSON, choosing the request shape from the path
    pub async fn fetch_value(&self, session: &Session, path: &str) -> Result<serde_json::Value> {
        self.fetch(session, path, QueryMode::for_path(path)).await
    }

    /// Fetch one resource path as JSON inside its own session.
    ///
    /// The session is logged off whether or not the fetch succeeded.
    pub async fn fetch_document(&self, path: &str) -> Result<serde_json::Value> {
        let session = self.authenticate().await?;
        let result = self.fetch_value(&session, path).await;
        self.logout(session).await;
        result
    }

    /// Fetch a listing endpoint and unwrap its `list`
    async fn fetch_list<T>(&self, session: &Session, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response: ListResponse<T> = self.fetch(session, path, QueryMode::for_path(path)).await?;
        if response.is_truncated() {
            warn!(
                "{} returned {} of {:?} entries; results beyond page_limit={} are not exported",
                path,
                response.list.len(),
                response.total_count,
                self.config.page_limit
            );
        }
        Ok(response.list)
    }

    /// Controller nodes
    pub async fn query_controllers(&self, session: &Session) -> Result<Vec<ControllerRecord>> {
        self.fetch_list(session, "controller").await
    }

    /// Per-zone AP and client counters
    pub async fn query_zone_inventory(&self, session: &Session) -> Result<Vec<ZoneRecord>> {
        self.fetch_list(session, "system/inventory").await
    }

    /// All access points
    pub async fn query_aps(&self, session: &Session) -> Result<Vec<ApRecord>> {
        self.fetch_list(session, "query/ap").await
    }

    /// All WLANs across zones
    pub async fn query_wlans(&self, session: &Session) -> Result<Vec<WlanRecord>> {
        self.fetch_list(session, "query/wlan").await
    }

    pub async fn query_wlan_detail(
        &self,
        session: &Session,
        zone_id: &str,
        wlan_id: &str,
    ) -> Result<WlanDetailRecord> {
        self.fetch(session, &wlan_path(zone_id, wlan_id), QueryMode::Plain)
            .await
    }

    pub async fn query_schedule(
        &self,
        session: &Session,
        zone_id: &str,
        schedule_id: &str,
    ) -> Result<ScheduleRecord> {
        self.fetch(session, &schedule_path(zone_id, schedule_id), QueryMode::Plain)
            .await
    }

    /// WLANs configured in one zone
    pub async fn query_zone_wlans(
        &self,
        session: &Session,
        zone_id: &str,
    ) -> Result<Vec<ZoneWlanSummary>> {
        self.fetch_list(session, &format!("rkszones/{}/wlans", zone_id))
            .await
    }

    /// Full zone configuration as raw JSON
    pub async fn query_zone_config(
        &self,
        session: &Session,
        zone_id: &str,
    ) -> Result<serde_json::Value> {
        self.fetch_value(session, &format!("rkszones/{}", zone_id))
            .await
    }

    /// Full WLAN configuration as raw JSON
    pub async fn query_wlan_config(
        &self,
        session: &Session,
        zone_id: &str,
        wlan_id: &str,
    ) -> Result<serde_json::Value> {
        self.fetch_value(session, &wlan_path(zone_id, wlan_id)).await
    }

    /// Full WLAN schedule as raw JSON
    pub async fn query_schedule_config(
        &self,
        session: &Session,
        zone_id: &str,
        schedule_id: &str,
    ) -> Result<serde_json::Value> {
        self.fetch_value(session, &schedule_path(zone_id, schedule_id))
            .await
    }

    /// Hotspot portal profile as raw JSON
    pub async fn query_hotspot_portal(
        &self,
        session: &Session,
        zone_id: &str,
        portal_id: &str,
    ) -> Result<serde_json::Value> {
        self.fetch_value(
            session,
            &format!("rkszones/{}/portals/hotspot/{}", zone_id, portal_id),
        )
        .await
    }
}

fn wlan_path(zone_id: &str, wlan_id: &str) -> String {
    format!("rkszones/{}/wlans/{}", zone_id, wlan_id)
}

fn schedule_path(zone_id: &str, schedule_id: &str) -> String {
    format!("rkszones/{}/wlanSchedulers/{}", zone_id, schedule_id)
}
