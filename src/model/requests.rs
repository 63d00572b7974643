/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Method;
use serde_json::Value;
use std::path::Path;

/// File sent as a multipart `file` part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the service
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from in-memory content
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Reads an upload from disk, using the file name of the path
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("{} has no file name", path.display()))
            })?;
        Ok(Self { file_name, content })
    }
}

/// A single call to the Power BI API
///
/// `endpoint` is relative to the session base URL, e.g. `myorg/datasets/{id}`.
/// It may already carry a query string; `params` are appended to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Endpoint path relative to the base URL
    pub endpoint: String,
    /// Additional query parameters
    pub params: Vec<(String, String)>,
    /// JSON body
    pub json: Option<Value>,
    /// Multipart file body
    pub file: Option<FileUpload>,
}

impl ApiRequest {
    /// Creates a request without body or extra parameters
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            json: None,
            file: None,
        }
    }

    /// GET request
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// POST request
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// PUT request
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// PATCH request
    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    /// DELETE request
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Adds a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present
    #[must_use]
    pub fn with_optional_param<V: ToString>(
        self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }

    /// Sets the JSON body
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Sets the multipart file body
    #[must_use]
    pub fn with_file(mut self, file: FileUpload) -> Self {
        self.file = Some(file);
        self
    }
}
