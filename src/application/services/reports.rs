/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

/// Reports services
pub struct Reports<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

fn clone_body(
    name: &str,
    target_workspace_id: Option<&str>,
    target_model_id: Option<&str>,
) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), json!(name));
    if let Some(workspace) = target_workspace_id {
        body.insert("targetWorkspaceId".to_string(), json!(workspace));
    }
    if let Some(model) = target_model_id {
        body.insert("targetModelId".to_string(), json!(model));
    }
    Value::Object(body)
}

impl<'a, D: Dispatcher> Reports<'a, D> {
    /// Creates a new view of the reports services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/reports",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of reports from "My Workspace"
    pub async fn get_reports(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting reports");
        self.session.get(self.endpoint).await
    }

    /// Returns a list of reports from the specified workspace
    pub async fn get_group_reports(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting reports in group {}", group_id);
        let endpoint = format!("myorg/groups/{group_id}/reports");
        self.session.get(&endpoint).await
    }

    /// Returns the specified report from "My Workspace"
    pub async fn get_report(&self, report_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{report_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified report from the specified workspace
    pub async fn get_group_report(
        &self,
        group_id: &str,
        report_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}");
        self.session.get(&endpoint).await
    }

    /// Returns the pages of the specified report from "My Workspace"
    pub async fn get_pages(&self, report_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{report_id}/pages", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the pages of the specified report from the specified workspace
    pub async fn get_group_pages(
        &self,
        group_id: &str,
        report_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/pages");
        self.session.get(&endpoint).await
    }

    /// Returns the specified page of the specified report from "My Workspace"
    pub async fn get_page(
        &self,
        report_id: &str,
        page_name: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{report_id}/pages/{page_name}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified page of the specified report from the specified workspace
    pub async fn get_group_page(
        &self,
        group_id: &str,
        report_id: &str,
        page_name: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/pages/{page_name}");
        self.session.get(&endpoint).await
    }

    /// Returns the data sources of the specified report from "My Workspace"
    pub async fn get_datasources(&self, report_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{report_id}/datasources", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the data sources of the specified report from the specified workspace
    pub async fn get_group_datasources(
        &self,
        group_id: &str,
        report_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/datasources");
        self.session.get(&endpoint).await
    }

    /// Clones the specified report from "My Workspace"
    ///
    /// # Arguments
    /// * `report_id` - The report ID
    /// * `name` - Name of the new report
    /// * `target_workspace_id` - Workspace to clone into, same workspace when `None`
    /// * `target_model_id` - Dataset to rebind the clone to, same dataset when `None`
    pub async fn clone_report(
        &self,
        report_id: &str,
        name: &str,
        target_workspace_id: Option<&str>,
        target_model_id: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Cloning report {} as {}", report_id, name);
        let endpoint = format!("{}/{report_id}/Clone", self.endpoint);
        let body = clone_body(name, target_workspace_id, target_model_id);
        self.session.post(&endpoint, Some(body)).await
    }

    /// Clones the specified report from the specified workspace
    pub async fn clone_group_report(
        &self,
        group_id: &str,
        report_id: &str,
        name: &str,
        target_workspace_id: Option<&str>,
        target_model_id: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Cloning report {} in group {} as {}",
            report_id, group_id, name
        );
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/Clone");
        let body = clone_body(name, target_workspace_id, target_model_id);
        self.session.post(&endpoint, Some(body)).await
    }

    /// Rebinds the specified report from "My Workspace" to another dataset
    pub async fn rebind_report(
        &self,
        report_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Rebinding report {} to dataset {}", report_id, dataset_id);
        let endpoint = format!("{}/{report_id}/Rebind", self.endpoint);
        self.session
            .post(&endpoint, Some(json!({ "datasetId": dataset_id })))
            .await
    }

    /// Rebinds the specified report from the specified workspace to another dataset
    pub async fn rebind_group_report(
        &self,
        group_id: &str,
        report_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Rebinding report {} in group {} to dataset {}",
            report_id, group_id, dataset_id
        );
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/Rebind");
        self.session
            .post(&endpoint, Some(json!({ "datasetId": dataset_id })))
            .await
    }

    /// Starts an asynchronous export of the specified report from "My Workspace"
    ///
    /// # Arguments
    /// * `export_request` - Body with `format` and optional configuration
    pub async fn export_to_file(
        &self,
        report_id: &str,
        export_request: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Exporting report {}", report_id);
        let endpoint = format!("{}/{report_id}/ExportTo", self.endpoint);
        self.session.post(&endpoint, Some(export_request)).await
    }

    /// Starts an asynchronous export of the specified report from the specified workspace
    pub async fn export_group_report_to_file(
        &self,
        group_id: &str,
        report_id: &str,
        export_request: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Exporting report {} in group {}", report_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}/ExportTo");
        self.session.post(&endpoint, Some(export_request)).await
    }

    /// Returns the status of an export job
    pub async fn get_export_to_file_status(
        &self,
        report_id: &str,
        export_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{report_id}/exports/{export_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Deletes the specified report from "My Workspace"
    pub async fn delete_report(&self, report_id: &str) -> Result<ApiResponse, AppError> {
        info!("Deleting report {}", report_id);
        let endpoint = format!("{}/{report_id}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Deletes the specified report from the specified workspace
    pub async fn delete_group_report(
        &self,
        group_id: &str,
        report_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Deleting report {} in group {}", report_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/reports/{report_id}");
        self.session.delete(&endpoint).await
    }
}
