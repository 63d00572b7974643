use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use tracing::info;

/// Users services
pub struct Users<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Users<'a, D> {
    /// Creates a new view of the users services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/RefreshUserPermissions",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Refreshes the permissions of the calling user
    ///
    /// Normally answered without a body, i.e. [`ApiResponse::Status`].
    pub async fn refresh_user_permissions(&self) -> Result<ApiResponse, AppError> {
        info!("Refreshing user permissions");
        self.session.post(self.endpoint, None).await
    }
}
