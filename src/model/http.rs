/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::{ApiRequest, FileUpload};
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Authenticated HTTP session against the Power BI API
///
/// Holds the base URL and the bearer credential obtained at construction.
/// It is read-only afterwards and can be shared between tasks.
pub struct PowerBiSession {
    http_client: Client,
    base_url: String,
    session: Session,
}

impl PowerBiSession {
    /// Creates a new session and performs authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(PowerBiSession)` - Authenticated session ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Auth::new(config.clone())?;
        let session = auth.login().await?;
        Self::with_session(&config.rest_api.base_url, session)
    }

    /// Creates a session from an already obtained credential
    pub fn with_session(base_url: &str, session: Session) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Creates a session from a raw access token
    pub fn with_token(base_url: &str, access_token: impl Into<String>) -> Result<Self, AppError> {
        Self::with_session(base_url, Session::from_token(access_token))
    }

    /// Base URL every endpoint is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current bearer credential
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Builds the full URL for an endpoint
    ///
    /// Absolute URLs are used as they are.
    #[must_use]
    pub fn build_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Dispatcher for PowerBiSession {
    async fn make_request(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let url = self.build_url(&request.endpoint);
        let authorization = self.session.authorization_header();

        let headers = vec![
            ("Authorization", authorization.as_str()),
            ("Accept", "application/json"),
        ];

        let response = make_http_request(
            &self.http_client,
            request.method,
            &url,
            headers,
            &request.params,
            request.json.as_ref(),
            request.file.as_ref(),
        )
        .await?;

        decode_response(response).await
    }
}

/// Makes one HTTP request and maps non-success statuses to [`AppError::Api`]
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, PATCH, DELETE)
/// * `url` - Full URL to request, possibly with a query string already
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `params` - Extra query parameters appended to the URL
/// * `json` - Optional JSON body
/// * `file` - Optional file sent as a multipart `file` part
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport failure or non-success status
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    params: &[(String, String)],
    json: Option<&Value>,
    file: Option<&FileUpload>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !params.is_empty() {
        request = request.query(params);
    }

    if let Some(file) = file {
        let part = Part::bytes(file.content.clone()).file_name(file.file_name.clone());
        request = request.multipart(Form::new().part("file", part));
    } else if let Some(body) = json {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = read_error_body(response).await;
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Api { status, body })
}

/// Reads the body of a failed response, empty when it cannot be read
pub(crate) async fn read_error_body(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read body of {} response: {}", status, e);
            String::new()
        }
    }
}

/// Decodes a successful response into JSON, or its status when the body is empty
async fn decode_response(response: Response) -> Result<ApiResponse, AppError> {
    let status = response.status();
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(ApiResponse::Status(status.as_u16()));
    }
    Ok(ApiResponse::Json(serde_json::from_str(&text)?))
}
