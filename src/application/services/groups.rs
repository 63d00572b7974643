/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::SHARED_CAPACITY_ID;
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::{Value, json};
use tracing::{debug, info};

/// Groups (workspaces) services
pub struct Groups<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Groups<'a, D> {
    /// Creates a new view of the groups services over an authenticated session
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

    /// Returns a list of workspaces the user has access to
    ///
    /// # Arguments
    /// * `top` - Number of entries to return
    /// * `skip` - Number of entries to skip
    /// * `filter` - OData filter, e.g. `contains(name,'Sales')`
    pub async fn get_groups(
        &self,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        debug!("Getting groups");
        let request = ApiRequest::get(self.endpoint)
            .with_optional_param("$top", top)
            .with_optional_param("$skip", skip)
            .with_optional_param("$filter", filter);
        self.session.make_request(request).await
    }

    /// Creates a new workspace
    ///
    /// # Arguments
    /// * `name` - Workspace name
    /// * `workspace_v2` - Create a new-style workspace
    pub async fn create_group(
        &self,
        name: &str,
        workspace_v2: bool,
    ) -> Result<ApiResponse, AppError> {
        info!("Creating group {}", name);
        let mut request = ApiRequest::post(self.endpoint).with_json(json!({ "name": name }));
        if workspace_v2 {
            request = request.with_param("workspaceV2", "True");
        }
        self.session.make_request(request).await
    }

    /// Deletes the specified workspace
    pub async fn delete_group(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        info!("Deleting group {}", group_id);
        let endpoint = format!("{}/{group_id}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Returns the users that have access to the specified workspace
    pub async fn get_group_users(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{group_id}/users", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Grants the specified user access to the specified workspace
    ///
    /// # Arguments
    /// * `group_id` - The workspace ID
    /// * `user` - Group user object, e.g.
    ///   `{"emailAddress": "...", "groupUserAccessRight": "Admin"}`
    pub async fn add_group_user(
        &self,
        group_id: &str,
        user: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Adding user to group {}", group_id);
        let endpoint = format!("{}/{group_id}/users", self.endpoint);
        self.session.post(&endpoint, Some(user)).await
    }

    /// Updates the access right of the specified user in the specified workspace
    pub async fn update_group_user(
        &self,
        group_id: &str,
        user: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Updating user in group {}", group_id);
        let endpoint = format!("{}/{group_id}/users", self.endpoint);
        self.session.put(&endpoint, user).await
    }

    /// Removes the specified user from the specified workspace
    ///
    /// # Arguments
    /// * `group_id` - The workspace ID
    /// * `user` - Email address or object ID of the user
    pub async fn delete_group_user(
        &self,
        group_id: &str,
        user: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Removing user {} from group {}", user, group_id);
        let endpoint = format!("{}/{group_id}/users/{user}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Assigns the specified workspace to the specified capacity
    pub async fn assign_to_capacity(
        &self,
        group_id: &str,
        capacity_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Assigning group {} to capacity {}", group_id, capacity_id);
        let endpoint = format!("{}/{group_id}/AssignToCapacity", self.endpoint);
        self.session
            .post(&endpoint, Some(json!({ "capacityId": capacity_id })))
            .await
    }

    /// Moves the specified workspace back to shared capacity
    pub async fn unassign_from_capacity(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        self.assign_to_capacity(group_id, SHARED_CAPACITY_ID).await
    }
}
