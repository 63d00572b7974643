use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use serde_json::Value;
use tracing::info;

/// Template apps services
pub struct TemplateApps<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> TemplateApps<'a, D> {
    /// Creates a new view of the template apps services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/CreateTemplateAppInstallTicket",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Generates an installation ticket for automated install of a template app
    ///
    /// # Arguments
    /// * `install_request` - Body with `installDetails`
    pub async fn create_install_ticket(
        &self,
        install_request: Value,
    ) -> Result<ApiResponse, AppError> {
        info!("Creating template app install ticket");
        self.session.post(self.endpoint, Some(install_request)).await
    }
}
