/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Power BI API
//!
//! This module obtains the bearer credential used by every request:
//! - an access token supplied by the caller, used as-is
//! - OAuth2 resource-owner password flow (username/password)
//! - OAuth2 client-credentials flow (client secret)
//!
//! Tokens are obtained once. They are not refreshed.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use crate::model::http::read_error_body;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Bearer credential attached to every request
///
/// `Debug` output redacts the access token.
#[derive(Clone)]
pub struct Session {
    /// Access token
    pub access_token: String,
    /// Token type, normally `Bearer`
    pub token_type: String,
    /// When the token stops being accepted, if known
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session around an access token with no known expiry
    #[must_use]
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_at: None,
        }
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Checks if the token is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60 = 1 minute)
    ///
    /// # Returns
    /// * `true` if the token is expired or will expire within the margin
    /// * `false` if the token is still valid or its expiry is unknown
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        let margin_seconds = margin_seconds.unwrap_or(60);
        let deadline = Duration::try_seconds(margin_seconds)
            .and_then(|margin| expires_at.checked_sub_signed(margin));
        match deadline {
            Some(deadline) => Utc::now() >= deadline,
            // out-of-range margin: a positive one covers any expiry
            None => margin_seconds > 0,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Authentication manager for the Power BI API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and token endpoint settings
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { config, client })
    }

    /// URL of the token endpoint for the configured tenant
    #[must_use]
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.config.auth.authority_url.trim_end_matches('/'),
            self.config.credentials.tenant_id
        )
    }

    /// Obtains a session using the first available credential
    ///
    /// # Returns
    /// * `Ok(Session)` - Bearer credential ready to attach to requests
    /// * `Err(AppError)` - If no credential is configured or the token endpoint rejects it
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;

        if let Some(token) = &credentials.access_token {
            debug!("Using configured access token");
            return Ok(Session::from_token(token.clone()));
        }

        let session = match (&credentials.username, &credentials.password) {
            (Some(username), Some(password)) => self.login_password(username, password).await?,
            _ => match &credentials.client_secret {
                Some(secret) => self.login_client_credentials(secret).await?,
                None => {
                    return Err(AppError::InvalidInput(
                        "no access token, username/password or client secret configured"
                            .to_string(),
                    ));
                }
            },
        };

        info!("✓ Login successful, client: {}", credentials.client_id);
        Ok(session)
    }

    /// Resource-owner password flow
    async fn login_password(&self, username: &str, password: &str) -> Result<Session, AppError> {
        debug!("Logging in as {} with password grant", username);
        let mut form = vec![
            ("grant_type", "password"),
            ("client_id", self.config.credentials.client_id.as_str()),
            ("scope", self.config.auth.scope.as_str()),
            ("username", username),
            ("password", password),
        ];
        if let Some(secret) = &self.config.credentials.client_secret {
            form.push(("client_secret", secret.as_str()));
        }
        self.request_token(&form).await
    }

    /// Client-credentials flow
    async fn login_client_credentials(&self, secret: &str) -> Result<Session, AppError> {
        debug!(
            "Logging in as application {} with client credentials grant",
            self.config.credentials.client_id
        );
        let form = vec![
            ("grant_type", "client_credentials"),
            ("client_id", self.config.credentials.client_id.as_str()),
            ("client_secret", secret),
            ("scope", self.config.auth.scope.as_str()),
        ];
        self.request_token(&form).await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<Session, AppError> {
        let url = self.token_url();
        debug!("Sending token request to: {}", url);

        let response = self.client.post(&url).form(form).send().await?;
        let status = response.status();
        debug!("Token response status: {}", status);

        if !status.is_success() {
            let body = read_error_body(response).await;
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Api { status, body });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.into())
    }
}
