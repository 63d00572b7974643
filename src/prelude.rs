/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Power BI Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Power BI Client library.
//!
//! ## Usage
//!
//! ```rust
//! use powerbi_client::prelude::*;
//!
//! let config = Config::with_access_token("token");
//! assert!(config.credentials.has_credential());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Power BI API client
pub use crate::application::config::{AuthConfig, Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler and bearer credential
pub use crate::application::auth::{Auth, Session};

/// Dispatcher trait implemented by the HTTP session
pub use crate::session::interface::Dispatcher;

/// Authenticated HTTP session
pub use crate::model::http::PowerBiSession;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Entry point facade
pub use crate::client::PowerBiClient;

/// Resource services
pub use crate::application::services::{
    Apps, AvailableFeatures, Capacities, CloneTileRequest, Dashboards, DataflowStorageAccounts,
    Dataflows, Datasets, Groups, Imports, Pipelines, PushDatasets, Reports, TemplateApps, Users,
};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{ApiRequest, FileUpload};

/// Response model
pub use crate::model::responses::ApiResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types appearing in the public API
pub use reqwest::{Method, StatusCode};
