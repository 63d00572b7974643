/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

/// Capacities services
///
/// Workloads and refreshables of the Premium capacities the user has access to.
pub struct Capacities<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Capacities<'a, D> {
    /// Creates a new view of the capacities services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/capacities",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of capacities the user has access to
    pub async fn get_capacities(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting capacities");
        self.session.get(self.endpoint).await
    }

    /// Returns the current state of the workloads of the specified capacity
    pub async fn get_workloads(&self, capacity_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{capacity_id}/Workloads", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the current state of the specified workload
    ///
    /// # Arguments
    /// * `capacity_id` - The capacity ID
    /// * `workload_name` - The workload name, e.g. `Dataflows`
    pub async fn get_workload(
        &self,
        capacity_id: &str,
        workload_name: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{capacity_id}/Workloads/{workload_name}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Changes the state of the specified workload
    ///
    /// # Arguments
    /// * `capacity_id` - The capacity ID
    /// * `workload_name` - The workload name
    /// * `state` - `Enabled` or `Disabled`
    /// * `max_memory_percentage` - Memory share the workload may use, when set
    pub async fn patch_workload(
        &self,
        capacity_id: &str,
        workload_name: &str,
        state: &str,
        max_memory_percentage: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Setting workload {} of capacity {} to {}",
            workload_name, capacity_id, state
        );
        let mut body = Map::new();
        body.insert("state".to_string(), json!(state));
        if let Some(percentage) = max_memory_percentage {
            body.insert("maxMemoryPercentageSetByUser".to_string(), json!(percentage));
        }
        let endpoint = format!("{}/{capacity_id}/Workloads/{workload_name}", self.endpoint);
        self.session.patch(&endpoint, Value::Object(body)).await
    }

    /// Returns a list of refreshables for all capacities of the user
    ///
    /// # Arguments
    /// * `top` - Number of entries to return
    /// * `expand` - Related entities to expand, e.g. `capacity,group`
    /// * `filter` - OData filter
    /// * `skip` - Number of entries to skip
    pub async fn get_refreshables(
        &self,
        top: u32,
        expand: Option<&str>,
        filter: Option<&str>,
        skip: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/refreshables?$top={top}", self.endpoint);
        let request = ApiRequest::get(endpoint)
            .with_optional_param("$expand", expand)
            .with_optional_param("$filter", filter)
            .with_optional_param("$skip", skip);
        self.session.make_request(request).await
    }

    /// Returns a list of refreshables for the specified capacity
    pub async fn get_refreshables_for_capacity(
        &self,
        capacity_id: &str,
        top: u32,
        expand: Option<&str>,
        filter: Option<&str>,
        skip: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{capacity_id}/Refreshables?$top={top}", self.endpoint);
        let request = ApiRequest::get(endpoint)
            .with_optional_param("$expand", expand)
            .with_optional_param("$filter", filter)
            .with_optional_param("$skip", skip);
        self.session.make_request(request).await
    }

    /// Returns the specified refreshable of the specified capacity
    pub async fn get_refreshable_for_capacity(
        &self,
        capacity_id: &str,
        refreshable_id: &str,
        expand: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{capacity_id}/Refreshables/{refreshable_id}",
            self.endpoint
        );
        let request = ApiRequest::get(endpoint).with_optional_param("$expand", expand);
        self.session.make_request(request).await
    }

    /// Assigns workspaces to a capacity (admin)
    ///
    /// # Arguments
    /// * `assignment` - Body with `capacityMigrationAssignments`
    pub async fn assign_workspaces_to_capacity(
        &self,
        assignment: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Assigning workspaces to capacities");
        self.session
            .post("myorg/admin/capacities/AssignWorkspaces", Some(assignment))
            .await
    }
}
