/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::{Value, json};
use tracing::{debug, info};

/// Push datasets services
///
/// Creates push datasets and writes rows into their tables.
pub struct PushDatasets<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> PushDatasets<'a, D> {
    /// Creates a new view of the push datasets services over an authenticated session
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

    /// Returns the tables of the specified push dataset from "My Workspace"
    pub async fn get_tables(&self, dataset_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dataset_id}/tables", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the tables of the specified push dataset from the specified workspace
    pub async fn get_group_tables(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/datasets/{dataset_id}/tables");
        self.session.get(&endpoint).await
    }

    /// Creates a new push dataset in "My Workspace"
    ///
    /// # Arguments
    /// * `dataset` - Dataset definition with `name` and `tables`
    /// * `retention_policy` - `None` or `basicFIFO`; service default when not set
    pub async fn post_dataset(
        &self,
        dataset: Value,
        retention_policy: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Creating push dataset");
        let request = ApiRequest::post(self.endpoint)
            .with_optional_param("defaultRetentionPolicy", retention_policy)
            .with_json(dataset);
        self.session.make_request(request).await
    }

    /// Creates a new push dataset in the specified workspace
    pub async fn post_dataset_in_group(
        &self,
        group_id: &str,
        dataset: Value,
        retention_policy: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Creating push dataset in group {}", group_id);
        let endpoint = format!("myorg/groups/{group_id}/datasets");
        let request = ApiRequest::post(endpoint)
            .with_optional_param("defaultRetentionPolicy", retention_policy)
            .with_json(dataset);
        self.session.make_request(request).await
    }

    /// Updates the schema of the specified table from "My Workspace"
    pub async fn put_table(
        &self,
        dataset_id: &str,
        table_name: &str,
        table: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Updating table {} of dataset {}", table_name, dataset_id);
        let endpoint = format!("{}/{dataset_id}/tables/{table_name}", self.endpoint);
        self.session.put(&endpoint, table).await
    }

    /// Updates the schema of the specified table from the specified workspace
    pub async fn put_group_table(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
        table: Value,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Updating table {} of dataset {} in group {}",
            table_name, dataset_id, group_id
        );
        let endpoint =
            format!("myorg/groups/{group_id}/datasets/{dataset_id}/tables/{table_name}");
        self.session.put(&endpoint, table).await
    }

    /// Adds rows to the specified table from "My Workspace"
    ///
    /// # Arguments
    /// * `rows` - Array of row objects, wrapped as `{"rows": [...]}`
    pub async fn post_rows(
        &self,
        dataset_id: &str,
        table_name: &str,
        rows: Value,
    ) -> Result<ApiResponse, AppError> {
        debug!(
            "Posting rows to table {} of dataset {}",
            table_name, dataset_id
        );
        let endpoint = format!("{}/{dataset_id}/tables/{table_name}/rows", self.endpoint);
        self.session
            .post(&endpoint, Some(json!({ "rows": rows })))
            .await
    }

    /// Adds rows to the specified table from the specified workspace
    pub async fn post_group_rows(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
        rows: Value,
    ) -> Result<ApiResponse, AppError> {
        debug!(
            "Posting rows to table {} of dataset {} in group {}",
            table_name, dataset_id, group_id
        );
        let endpoint =
            format!("myorg/groups/{group_id}/datasets/{dataset_id}/tables/{table_name}/rows");
        self.session
            .post(&endpoint, Some(json!({ "rows": rows })))
            .await
    }

    /// Deletes all rows of the specified table from "My Workspace"
    pub async fn delete_rows(
        &self,
        dataset_id: &str,
        table_name: &str,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Deleting rows of table {} of dataset {}",
            table_name, dataset_id
        );
        let endpoint = format!("{}/{dataset_id}/tables/{table_name}/rows", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Deletes all rows of the specified table from the specified workspace
    pub async fn delete_group_rows(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Deleting rows of table {} of dataset {} in group {}",
            table_name, dataset_id, group_id
        );
        let endpoint =
            format!("myorg/groups/{group_id}/datasets/{dataset_id}/tables/{table_name}/rows");
        self.session.delete(&endpoint).await
    }
}
