/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors surfaced by the Power BI client
///
/// The only remote failure kind is [`AppError::Api`]; the other variants
/// describe local failures while talking to the service.
#[derive(Debug)]
pub enum AppError {
    /// The service answered with a non-success status
    Api {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport level failure
    Network(reqwest::Error),
    /// Body could not be encoded or decoded as JSON
    Json(serde_json::Error),
    /// Local I/O failure, e.g. reading a file to upload
    Io(std::io::Error),
    /// Caller supplied input that cannot be used
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status attached to this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body of a remote failure
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Checks whether the service reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api { status, body } => write!(f, "api error {status}: {body}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
