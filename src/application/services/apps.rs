use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use tracing::debug;

/// Apps services, read-only access to installed apps and their content
pub struct Apps<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Apps<'a, D> {
    /// Creates a new view of the apps services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/apps",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of installed apps
    pub async fn get_apps(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting apps");
        self.session.get(self.endpoint).await
    }

    /// Returns the specified installed app
    pub async fn get_app(&self, app_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting app {}", app_id);
        let endpoint = format!("{}/{app_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns a list of dashboards from the specified app
    pub async fn get_dashboards(&self, app_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{app_id}/dashboards", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified dashboard from the specified app
    pub async fn get_dashboard(
        &self,
        app_id: &str,
        dashboard_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{app_id}/dashboards/{dashboard_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns a list of tiles within the specified dashboard from the specified app
    pub async fn get_tiles(
        &self,
        app_id: &str,
        dashboard_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{app_id}/dashboards/{dashboard_id}/tiles", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified tile within the specified dashboard from the specified app
    pub async fn get_tile(
        &self,
        app_id: &str,
        dashboard_id: &str,
        tile_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!(
            "{}/{app_id}/dashboards/{dashboard_id}/tiles/{tile_id}",
            self.endpoint
        );
        self.session.get(&endpoint).await
    }

    /// Returns a list of reports from the specified app
    pub async fn get_reports(&self, app_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{app_id}/reports", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified report from the specified app
    pub async fn get_report(&self, app_id: &str, report_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{app_id}/reports/{report_id}", self.endpoint);
        self.session.get(&endpoint).await
    }
}
