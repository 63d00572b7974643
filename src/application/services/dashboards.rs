/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// Target of a tile clone operation
///
/// Only `target_dashboard_id` is required; the other fields are sent when set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneTileRequest {
    /// Dashboard the tile is cloned into
    pub target_dashboard_id: String,
    /// Workspace of the target dashboard, "My Workspace" when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_workspace_id: Option<String>,
    /// Report the cloned tile is rebound to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_report_id: Option<String>,
    /// Dataset the cloned tile is rebound to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_model_id: Option<String>,
    /// `Tail` or `Abort`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_conflict_action: Option<String>,
}

/// Dashboards services
pub struct Dashboards<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Dashboards<'a, D> {
    /// Creates a new view of the dashboards services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/dashboards",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Creates a new empty dashboard in "My Workspace"
    pub async fn add_dashboard(&self, name: &str) -> Result<ApiResponse, AppError> {
        info!("Adding dashboard {}", name);
        self.session
            .post(self.endpoint, Some(json!({ "name": name })))
            .await
    }

    /// Creates a new empty dashboard in the specified workspace
    pub async fn add_dashboard_in_group(
        &self,
        group_id: &str,
        name: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Adding dashboard {} in group {}", name, group_id);
        let endpoint = format!("myorg/groups/{group_id}/dashboards");
        self.session
            .post(&endpoint, Some(json!({ "name": name })))
            .await
    }

    /// Returns a list of dashboards from "My Workspace"
    pub async fn get_dashboards(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting dashboards");
        self.session.get(self.endpoint).await
    }

    /// Returns a list of dashboards from the specified workspace
    pub async fn get_group_dashboards(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting dashboards in group {}", group_id);
        let endpoint = format!("myorg/groups/{group_id}/dashboards");
        self.session.get(&endpoint).await
    }

    /// Returns the specified dashboard from "My Workspace"
    pub async fn get_dashboard(&self, dashboard_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dashboard_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified dashboard from the specified workspace
    pub async fn get_group_dashboard(
        &self,
        group_id: &str,
        dashboard_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/dashboards/{dashboard_id}");
        self.session.get(&endpoint).await
    }

    /// Returns a list of tiles within the specified dashboard from "My Workspace"
    pub async fn get_tiles(&self, dashboard_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dashboard_id}/tiles", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns a list of tiles within the specified dashboard from the specified workspace
    pub async fn get_group_tiles(
        &self,
        group_id: &str,
        dashboard_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/dashboards/{dashboard_id}/tiles");
        self.session.get(&endpoint).await
    }

    /// Returns the specified tile within the specified dashboard from "My Workspace"
    pub async fn get_tile(
        &self,
        dashboard_id: &str,
        tile_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{dashboard_id}/tiles/{tile_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified tile within the specified dashboard from the specified workspace
    pub async fn get_group_tile(
        &self,
        group_id: &str,
        dashboard_id: &str,
        tile_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint =
            format!("myorg/groups/{group_id}/dashboards/{dashboard_id}/tiles/{tile_id}");
        self.session.get(&endpoint).await
    }

    /// Clones the specified tile from "My Workspace"
    pub async fn clone_tile(
        &self,
        dashboard_id: &str,
        tile_id: &str,
        target: &CloneTileRequest,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Cloning tile {} of dashboard {} into {}",
            tile_id, dashboard_id, target.target_dashboard_id
        );
        let endpoint = format!("{}/{dashboard_id}/tiles/{tile_id}/Clone", self.endpoint);
        let body = serde_json::to_value(target)?;
        self.session.post(&endpoint, Some(body)).await
    }

    /// Clones the specified tile from the specified workspace
    pub async fn clone_group_tile(
        &self,
        group_id: &str,
        dashboard_id: &str,
        tile_id: &str,
        target: &CloneTileRequest,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Cloning tile {} of dashboard {} in group {} into {}",
            tile_id, dashboard_id, group_id, target.target_dashboard_id
        );
        let endpoint =
            format!("myorg/groups/{group_id}/dashboards/{dashboard_id}/tiles/{tile_id}/Clone");
        let body = serde_json::to_value(target)?;
        self.session.post(&endpoint, Some(body)).await
    }

    /// Deletes the specified dashboard from "My Workspace"
    pub async fn delete_dashboard(&self, dashboard_id: &str) -> Result<ApiResponse, AppError> {
        info!("Deleting dashboard {}", dashboard_id);
        let endpoint = format!("{}/{dashboard_id}", self.endpoint);
        self.session.delete(&endpoint).await
    }

    /// Deletes the specified dashboard from the specified workspace
    pub async fn delete_group_dashboard(
        &self,
        group_id: &str,
        dashboard_id: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Deleting dashboard {} in group {}", dashboard_id, group_id);
        let endpoint = format!("myorg/groups/{group_id}/dashboards/{dashboard_id}");
        self.session.delete(&endpoint).await
    }
}
