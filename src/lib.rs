/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Power BI Client
//!
//! A client for the Power BI REST API.
//!
//! The crate is split in two layers:
//!
//! - a session layer ([`model::http::PowerBiSession`]) that owns the bearer
//!   credential and performs one authenticated HTTP call per request, behind
//!   the [`session::interface::Dispatcher`] trait;
//! - resource services (datasets, dashboards, groups, reports, ...) that map
//!   each API operation onto an endpoint and hand it to the dispatcher.
//!
//! [`client::PowerBiClient`] is the entry point tying both together.
//!
//! ## Example
//!
//! ```ignore
//! use powerbi_client::prelude::*;
//!
//! let session = PowerBiSession::new(Config::new()).await?;
//! let client = PowerBiClient::new(session);
//!
//! let datasets = client.datasets().get_datasets().await?;
//! let history = client.datasets().get_refresh_history("dataset-id", Some(10)).await?;
//! ```

/// Application layer: configuration, authentication and resource services
pub mod application;
/// Entry point facade over every resource service
pub mod client;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Dispatcher abstraction shared by every resource service
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
