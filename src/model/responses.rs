use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of a successful call, passed through to the caller untouched
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Decoded JSON body
    Json(Value),
    /// Status code of a call answered without a body, e.g. `202 Accepted` for refresh triggers
    Status(u16),
}

impl ApiResponse {
    /// The JSON body, if the service returned one
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Status(_) => None,
        }
    }

    /// Consumes the response returning its JSON body, if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Status(_) => None,
        }
    }

    /// The status code of a body-less response
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiResponse::Status(code) => Some(*code),
            ApiResponse::Json(_) => None,
        }
    }

    /// Deserializes the JSON body into a caller supplied type
    ///
    /// A body-less response deserializes from `null`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, AppError> {
        let value = self.into_json().unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}
