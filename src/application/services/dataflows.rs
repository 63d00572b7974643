use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::json;
use tracing::{debug, info};

/// Dataflows services
///
/// Dataflows only exist inside workspaces, so every operation takes a group ID.
pub struct Dataflows<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Dataflows<'a, D> {
    /// Creates a new view of the dataflows services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/groups",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of dataflows from the specified workspace
    pub async fn get_dataflows(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting dataflows in group {}", group_id);
        let endpoint = format!("{}/{group_id}/dataflows", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Exports the definition of the specified dataflow
    pub async fn get_dataflow(
        &self,
        group_id: &str,
        dataflow_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{group_id}/dataflows/{dataflow_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Deletes the specified dataflow
    pub async fn delete_dataflow(
        &self,
        group_id: &str,
        dataflow_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Deleting dataflow {} in group {}", dataflow_id, group_id);
        let endpoint = format!("{}/{group_id}/dataflows/{dataflow_id}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Triggers a refresh of the specified dataflow
    ///
    /// # Arguments
    /// * `notify_option` - `MailOnFailure` or `NoNotification`
    pub async fn refresh_dataflow(
        &self,
        group_id: &str,
        dataflow_id: &str,
        notify_option: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Refreshing dataflow {} in group {}", dataflow_id, group_id);
        let endpoint = format!(
            "{}/{group_id}/dataflows/{dataflow_id}/refreshes",
            self.endpoint
        );
        self.session
            .post(&endpoint, Some(json!({ "notifyOption": notify_option })))
            .await
    }

    /// Returns the refresh transactions of the specified dataflow
    pub async fn get_dataflow_transactions(
        &self,
        group_id: &str,
        dataflow_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{group_id}/dataflows/{dataflow_id}/transactions",
            self.endpoint
        );
        self.session.get(&endpoint).await
    }

    /// Returns the data sources of the specified dataflow
    pub async fn get_dataflow_data_sources(
        &self,
        group_id: &str,
        dataflow_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{group_id}/dataflows/{dataflow_id}/datasources",
            self.endpoint
        );
        self.session.get(&endpoint).await
    }

    /// Returns the dataflows the specified dataflow depends on
    pub async fn get_upstream_dataflows(
        &self,
        group_id: &str,
        dataflow_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{group_id}/dataflows/{dataflow_id}/upstreamDataflows",
            self.endpoint
        );
        self.session.get(&endpoint).await
    }
}
