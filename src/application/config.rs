use crate::constants::{
    DEFAULT_AUTHORITY_URL, DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TENANT_ID,
};
use crate::utils::config::{get_env_or_none, non_empty};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials used to obtain a Power BI access token
///
/// Secrets are never serialized, so they do not leak through `Debug`/`Display`.
pub struct Credentials {
    /// Azure AD tenant the application is registered in
    pub tenant_id: String,
    /// Application (client) ID
    pub client_id: String,
    /// Client secret for the client-credentials flow
    #[serde(skip_serializing, default)]
    pub client_secret: Option<String>,
    /// User name for the resource-owner password flow
    pub username: Option<String>,
    /// Password for the resource-owner password flow
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    /// Already issued access token, used verbatim when present
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint is appended to
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the token endpoint
pub struct AuthConfig {
    /// Identity platform host
    pub authority_url: String,
    /// Scope requested for the access token
    pub scope: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Power BI client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token endpoint configuration
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authority_url: DEFAULT_AUTHORITY_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first, if any.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let config = Self::from_lookup(get_env_or_none);
        if !config.credentials.has_credential() {
            warn!("No Power BI credential found in environment variables or .env file");
        }
        config
    }

    /// Builds a configuration from `POWERBI_*` values supplied by `lookup`
    ///
    /// Missing or blank values fall back to the defaults.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of a variable by name, e.g. from the environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| non_empty(lookup(key));
        let value_or = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        Config {
            credentials: Credentials {
                tenant_id: value_or("POWERBI_TENANT_ID", DEFAULT_TENANT_ID),
                client_id: value_or("POWERBI_CLIENT_ID", ""),
                client_secret: value("POWERBI_CLIENT_SECRET"),
                username: value("POWERBI_USERNAME"),
                password: value("POWERBI_PASSWORD"),
                access_token: value("POWERBI_ACCESS_TOKEN"),
            },
            rest_api: RestApiConfig {
                base_url: value_or("POWERBI_BASE_URL", DEFAULT_BASE_URL),
            },
            auth: AuthConfig {
                authority_url: value_or("POWERBI_AUTHORITY_URL", DEFAULT_AUTHORITY_URL),
                scope: value_or("POWERBI_SCOPE", DEFAULT_SCOPE),
            },
        }
    }

    /// Creates a configuration that authenticates with an existing access token
    #[must_use]
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                tenant_id: DEFAULT_TENANT_ID.to_string(),
                access_token: Some(access_token.into()),
                ..Credentials::default()
            },
            rest_api: RestApiConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Credentials {
    /// Checks whether any authentication flow can be attempted
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.access_token.is_some()
            || (self.username.is_some() && self.password.is_some())
            || self.client_secret.is_some()
    }
}
