use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::Value;
use tracing::{debug, info};

/// Deployment pipelines services
pub struct Pipelines<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Pipelines<'a, D> {
    /// Creates a new view of the pipelines services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/pipelines",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of deployment pipelines the user has access to
    pub async fn get_pipelines(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting pipelines");
        self.session.get(self.endpoint).await
    }

    /// Returns the specified deployment pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline ID
    /// * `expand_stages` - Include the pipeline stages in the response
    pub async fn get_pipeline(
        &self,
        pipeline_id: &str,
        expand_stages: bool,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{pipeline_id}", self.endpoint);
        let mut request = ApiRequest::get(endpoint);
        if expand_stages {
            request = request.with_param("$expand", "stages");
        }
        self.session.make_request(request).await
    }

    /// Returns the latest deploy operations of the specified pipeline
    pub async fn get_pipeline_operations(
        &self,
        pipeline_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{pipeline_id}/operations", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the details of the specified deploy operation
    pub async fn get_pipeline_operation(
        &self,
        pipeline_id: &str,
        operation_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{pipeline_id}/operations/{operation_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the artifacts of the specified stage
    ///
    /// # Arguments
    /// * `stage_order` - 0 for development, 1 for test, 2 for production
    pub async fn get_pipeline_stage_artifacts(
        &self,
        pipeline_id: &str,
        stage_order: u8,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{pipeline_id}/stages/{stage_order}/artifacts",
            self.endpoint
        );
        self.session.get(&endpoint).await
    }

    /// Deploys all content from the source stage
    ///
    /// # Arguments
    /// * `deploy_request` - Body with `sourceStageOrder` and deployment `options`
    pub async fn deploy_all(
        &self,
        pipeline_id: &str,
        deploy_request: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Deploying all content of pipeline {}", pipeline_id);
        let endpoint = format!("{}/{pipeline_id}/deployAll", self.endpoint);
        self.session.post(&endpoint, Some(deploy_request)).await
    }

    /// Deploys the selected content from the source stage
    pub async fn selective_deploy(
        &self,
        pipeline_id: &str,
        deploy_request: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Deploying selected content of pipeline {}", pipeline_id);
        let endpoint = format!("{}/{pipeline_id}/deploy", self.endpoint);
        self.session.post(&endpoint, Some(deploy_request)).await
    }
}
