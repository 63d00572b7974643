/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_REFRESH_TOP;
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use tracing::{debug, info};

/// Datasets services
///
/// Covers datasets in "My Workspace" (`myorg/datasets`) and in workspaces
/// (`myorg/groups/{group_id}/datasets`).
pub struct Datasets<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Datasets<'a, D> {
    /// Creates a new view of the datasets services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/datasets",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of datasets from "My Workspace"
    pub async fn get_datasets(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting datasets");
        self.session.get(self.endpoint).await
    }

    /// Returns a specific dataset from "My Workspace"
    ///
    /// # Arguments
    /// * `dataset_id` - The dataset ID
    pub async fn get_dataset(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting dataset {}", dataset_id);
        let endpoint = format!("{}/{dataset_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns a list of datasets from the specified workspace
    ///
    /// # Arguments
    /// * `group_id` - The workspace ID
    pub async fn get_datasets_in_group(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting datasets in group {}", group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets");
        self.session.get(&endpoint).await
    }

    /// Returns a specific dataset from the specified workspace
    ///
    /// # Arguments
    /// * `group_id` - The workspace ID
    /// * `dataset_id` - The dataset ID
    pub async fn get_dataset_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        debug!("Getting dataset {} in group {}", dataset_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets/{dataset_id}");
        self.session.get(&endpoint).await
    }

    /// Triggers a refresh of the specified dataset from "My Workspace"
    ///
    /// The service accepts the refresh asynchronously and answers without a body,
    /// so the result is normally [`ApiResponse::Status`] with `202`.
    pub async fn refresh_dataset(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        info!("Refreshing dataset {}", dataset_id);
        let endpoint = format!("{}/{dataset_id}/refreshes", self.endpoint);
        self.session.post(&endpoint, None).await
    }

    /// Triggers a refresh of the specified dataset from the specified workspace
    pub async fn refresh_dataset_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Refreshing dataset {} in group {}", dataset_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets/{dataset_id}/refreshes");
        self.session.post(&endpoint, None).await
    }

    /// Returns the refresh history of the specified dataset from "My Workspace"
    ///
    /// # Arguments
    /// * `dataset_id` - The dataset ID
    /// * `stop` - Number of entries to return, 500 when `None`
    pub async fn get_refresh_history(
        &self,
        dataset_id: &str,
        stop: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let top = stop.unwrap_or(DEFAULT_REFRESH_TOP);
        debug!(
            "Getting refresh history of dataset {} (top {})",
            dataset_id, top
        );
        let endpoint = format!("{}/{dataset_id}/refreshes?$top={top}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the refresh history of the specified dataset from the specified workspace
    ///
    /// # Arguments
    /// * `group_id` - The workspace ID
    /// * `dataset_id` - The dataset ID
    /// * `stop` - Number of entries to return, 500 when `None`
    pub async fn get_refresh_history_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
        stop: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let top = stop.unwrap_or(DEFAULT_REFRESH_TOP);
        debug!(
            "Getting refresh history of dataset {} in group {} (top {})",
            dataset_id, group_id, top
        );
        let endpoint =
            format!("myorg/groups/{group_id}/datasets/{dataset_id}/refreshes?$top={top}");
        self.session.get(&endpoint).await
    }

    /// Deletes the specified dataset from "My Workspace"
    pub async fn delete_dataset(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        info!("Deleting dataset {}", dataset_id);
        let endpoint = format!("{}/{dataset_id}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Deletes the specified dataset from the specified workspace
    pub async fn delete_dataset_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Deleting dataset {} in group {}", dataset_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets/{dataset_id}");
        self.session.delete(&endpoint).await
    }

    /// Returns the data sources of the specified dataset
    pub async fn get_datasources(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dataset_id}/datasources", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the parameters of the specified dataset
    pub async fn get_parameters(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dataset_id}/parameters", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the refresh schedule of the specified dataset
    pub async fn get_refresh_schedule(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dataset_id}/refreshSchedule", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Transfers ownership of the specified dataset to the current user
    pub async fn take_over_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Taking over dataset {} in group {}", dataset_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets/{dataset_id}/Default.TakeOver");
        self.session.post(&endpoint, None).await
    }
}
