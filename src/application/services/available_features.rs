use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;

/// Available features services
pub struct AvailableFeatures<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> AvailableFeatures<'a, D> {
    /// Creates a new view of the available features services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/availableFeatures",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of available features for the user
    pub async fn get_available_features(&self) -> Result<ApiResponse, AppError> {
        self.session.get(self.endpoint).await
    }

    /// Returns the specified available feature for the user, by name
    pub async fn get_available_feature_by_name(
        &self,
        feature_name: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}(featureName='{feature_name}')", self.endpoint);
        self.session.get(&endpoint).await
    }
}
