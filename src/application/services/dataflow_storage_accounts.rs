use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::json;
use tracing::info;

/// Dataflow storage accounts services
pub struct DataflowStorageAccounts<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> DataflowStorageAccounts<'a, D> {
    /// Creates a new view of the dataflow storage accounts services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/dataflowStorageAccounts",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of dataflow storage accounts the user has access to
    pub async fn get_dataflow_storage_accounts(&self) -> Result<ApiResponse, AppError> {
        self.session.get(self.endpoint).await
    }

    /// Assigns the specified workspace to the specified dataflow storage account
    ///
    /// An all-zero `dataflow_storage_id` unassigns the workspace.
    pub async fn assign_to_dataflow_storage(
        &self,
        group_id: &str,
        dataflow_storage_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Assigning group {} to dataflow storage {}",
            group_id, dataflow_storage_id
        );
        let endpoint = format!("myorg/groups/{group_id}/AssignToDataflowStorage");
        self.session
            .post(
                &endpoint,
                Some(json!({ "dataflowStorageId": dataflow_storage_id })),
            )
            .await
    }
}
