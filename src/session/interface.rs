use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Capability of performing one authenticated call against the Power BI API
///
/// Resource services only depend on this trait, so they can be exercised
/// without network access by injecting another implementation.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Performs the request and returns the decoded result
    ///
    /// # Returns
    /// * `Ok(ApiResponse::Json)` - Success with a body
    /// * `Ok(ApiResponse::Status)` - Success without a body
    /// * `Err(AppError::Api)` - The service answered with a non-success status
    async fn make_request(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;

    /// Makes a GET request
    async fn get(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        self.make_request(ApiRequest::get(endpoint)).await
    }

    /// Makes a POST request with an optional JSON body
    async fn post(&self, endpoint: &str, body: Option<Value>) -> Result<ApiResponse, AppError> {
        let request = ApiRequest::post(endpoint);
        let request = match body {
            Some(body) => request.with_json(body),
            None => request,
        };
        self.make_request(request).await
    }

    /// Makes a PUT request
    async fn put(&self, endpoint: &str, body: Value) -> Result<ApiResponse, AppError> {
        self.make_request(ApiRequest::put(endpoint).with_json(body))
            .await
    }

    /// Makes a PATCH request
    async fn patch(&self, endpoint: &str, body: Value) -> Result<ApiResponse, AppError> {
        self.make_request(ApiRequest::patch(endpoint).with_json(body))
            .await
    }

    /// Makes a DELETE request
    async fn delete(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        self.make_request(ApiRequest::delete(endpoint)).await
    }
}
