/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Response from the OAuth2 token endpoint
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Token type, always `Bearer` for the identity platform
    pub token_type: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// The access token itself
    pub access_token: String,
}

impl TokenResponse {
    /// Converts the response to a Session object
    ///
    /// The expiry instant is computed relative to now.
    #[must_use]
    pub fn get_session(&self) -> Session {
        Session {
            access_token: self.access_token.clone(),
            token_type: self.token_type.clone(),
            expires_at: self.expires_in.and_then(expiry_from_now),
        }
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Instant `seconds` from now, `None` when it cannot be represented
fn expiry_from_now(seconds: i64) -> Option<DateTime<Utc>> {
    let expires_at = Duration::try_seconds(seconds)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
    if expires_at.is_none() {
        warn!(
            "Token lifetime of {} seconds is out of range, expiry unknown",
            seconds
        );
    }
    expires_at
}

impl From<TokenResponse> for Session {
    fn from(v: TokenResponse) -> Self {
        v.get_session()
    }
}
