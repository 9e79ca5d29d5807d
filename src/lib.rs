//! Ruckus SmartZone Prometheus Exporter
//!
//! A Prometheus metrics exporter for Ruckus SmartZone / vSZ wireless controllers.
//!
//! # Overview
//!
//! On every scrape of `/metrics` the exporter opens a service ticket session against the
//! controller's public REST API, fetches controller, zone, access point and WLAN inventory,
//! and exposes it in the Prometheus text format. Nothing is cached between scrapes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐       HTTPS/JSON      ┌──────────────┐
//! │  SmartZone  │ ◄──────────────────►  │   Exporter   │
//! │ controller  │  /wsg/api/public/...  │              │
//! └─────────────┘                       │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                       │  │ Cycle  │  │ ◄────────────► │ Prometheus │
//!                                       │  └────────┘  │   /metrics     └────────────┘
//!                                       └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`smartzone`] - REST client, service ticket sessions and API type definitions
//! - [`inventory`] - Snapshot assembly (the fixed sequence of API calls)
//! - [`collectors`] - Snapshot to metric family materializers
//! - [`metrics`] - Metric family model and text rendering
//! - [`cycle`] - One complete collection cycle
//! - [`server`] - HTTP server
//! - [`diff`] - Configuration record comparison used by `smartzone-compare`
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use smartzone_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     config.validate()?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod collectors;
pub mod config;
pub mod cycle;
pub mod diff;
pub mod error;
pub mod inventory;
pub mod metrics;
pub mod server;
pub mod smartzone;
