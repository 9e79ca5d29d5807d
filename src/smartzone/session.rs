//! Service Ticket Session Management
//!
//! The SmartZone public API authenticates every call with a short-lived service ticket
//! obtained by exchanging the operator's credentials. A fresh [`Session`] is created for
//! each collection cycle and logged off when the cycle ends; nothing is cached between
//! scrapes.

use crate::config::SmartZoneConfig;
use crate::error::{ExporterError, Result};
use crate::smartzone::types::{ApiInfo, TicketRequest, TicketResponse};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, warn};

/// An authenticated SmartZone session
#[derive(Debug)]
pub struct Session {
    service_ticket: SecretString,
    api_compatible: bool,
}

impl Session {
    pub fn new(service_ticket: impl Into<String>, api_compatible: bool) -> Self {
        let service_ticket: String = service_ticket.into();
        Self {
            service_ticket: SecretString::new(service_ticket.into()),
            api_compatible,
        }
    }

    /// Ticket value appended as the `serviceTicket` query parameter
    pub fn ticket(&self) -> &str {
        self.service_ticket.expose_secret()
    }

    /// Whether the controller advertises the API version this exporter is pinned to
    pub fn api_compatible(&self) -> bool {
        self.api_compatible
    }
}

/// Exchanges credentials for service tickets
pub struct SessionManager {
    config: Arc<SmartZoneConfig>,
    http: reqwest::Client,
}

impl SessionManager {
    pub fn new(config: Arc<SmartZoneConfig>, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Open a new session.
    ///
    /// Probes the controller's supported API versions (informational only), then posts the
    /// credentials to `serviceTicket`.
    ///
    /// # Errors
    ///
    /// - [`ExporterError::Authentication`] if the exchange returns a non-success status or
    ///   the response has no ticket
    /// - [`ExporterError::Transport`] on connection failures
    pub async fn authenticate(&self) -> Result<Session> {
        let api_compatible = self.probe_api_version().await;

        let url = self.config.api_url("serviceTicket");
        let request = TicketRequest {
            username: &self.config.username,
            password: self.config.password.expose_secret(),
        };

        debug!("Requesting service ticket for {}", self.config.username);
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::Authentication(format!(
                "credential exchange returned HTTP {}",
                status
            )));
        }

        let body = response.bytes().await?;
        let ticket: TicketResponse = serde_json::from_slice(&body).map_err(|e| {
            ExporterError::Authentication(format!("unreadable service ticket response: {}", e))
        })?;

        if let Some(version) = &ticket.controller_version {
            debug!("Controller version {}", version);
        }

        match ticket.service_ticket.filter(|t| !t.is_empty()) {
            Some(service_ticket) => {
                debug!("Service ticket acquired");
                Ok(Session::new(service_ticket, api_compatible))
            }
            None => Err(ExporterError::Authentication(
                "response carried no serviceTicket".to_string(),
            )),
        }
    }

    /// Check whether the pinned API version is advertised. Never fails the cycle.
    async fn probe_api_version(&self) -> bool {
        match self.fetch_api_info().await {
            Ok(info) => {
                let compatible = info.supports(&self.config.api_version);
                if !compatible {
                    warn!(
                        "Controller does not advertise API version {} (supported: {:?})",
                        self.config.api_version, info.api_support_versions
                    );
                }
                compatible
            }
            Err(e) => {
                warn!("API version probe failed: {}", e);
                false
            }
        }
    }

    async fn fetch_api_info(&self) -> Result<ApiInfo> {
        let response = self.http.get(self.config.api_info_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::Resource {
                path: "apiInfo".to_string(),
                status,
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Release the ticket. Failures are logged and otherwise ignored.
    pub async fn logout(&self, session: Session) {
        let url = self.config.api_url("serviceTicket");
        let result = self
            .http
            .delete(&url)
            .query(&[("serviceTicket", session.ticket())])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => debug!("Service ticket released"),
            Ok(response) => debug!("Service ticket logoff returned HTTP {}", response.status()),
            Err(e) => debug!("Service ticket logoff failed: {}", e),
        }
    }
}
