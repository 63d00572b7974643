/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{ApiRequest, FileUpload};
use crate::model::responses::ApiResponse;
use crate::session::interface::Dispatcher;
use tracing::{debug, info};

/// Imports services
///
/// Uploads `.pbix` files and tracks the resulting import jobs.
pub struct Imports<'a, D: Dispatcher> {
    session: &'a D,
    endpoint: &'static str,
}

impl<'a, D: Dispatcher> Imports<'a, D> {
    /// Creates a new view of the imports services over an authenticated session
    pub fn new(session: &'a D) -> Self {
        Self {
            session,
            endpoint: "myorg/imports",
        }
    }

    /// Endpoint prefix of this service
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }

    /// Returns a list of imports from "My Workspace"
    pub async fn get_imports(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting imports");
        self.session.get(self.endpoint).await
    }

    /// Returns a list of imports from the specified workspace
    pub async fn get_group_imports(&self, group_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/imports");
        self.session.get(&endpoint).await
    }

    /// Returns the specified import from "My Workspace"
    pub async fn get_import(&self, import_id: &str) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/{import_id}", self.endpoint);
        self.session.get(&endpoint).await
    }

    /// Returns the specified import from the specified workspace
    pub async fn get_group_import(
        &self,
        group_id: &str,
        import_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/imports/{import_id}");
        self.session.get(&endpoint).await
    }

    /// Creates a temporary blob storage location for importing large files into "My Workspace"
    pub async fn create_temporary_upload_location(&self) -> Result<ApiResponse, AppError> {
        let endpoint = format!("{}/createTemporaryUploadLocation", self.endpoint);
        self.session.post(&endpoint, None).await
    }

    /// Creates a temporary blob storage location for importing large files
    /// into the specified workspace
    pub async fn create_temporary_upload_location_in_group(
        &self,
        group_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("myorg/groups/{group_id}/imports/createTemporaryUploadLocation");
        self.session.post(&endpoint, None).await
    }

    /// Imports a file into "My Workspace"
    ///
    /// # Arguments
    /// * `dataset_display_name` - Display name of the resulting dataset
    /// * `name_conflict` - `Ignore`, `Abort`, `Overwrite`, `CreateOrOverwrite`, ...;
    ///   service default when `None`
    /// * `file` - The file to upload
    pub async fn post_import(
        &self,
        dataset_display_name: &str,
        name_conflict: Option<&str>,
        file: FileUpload,
    ) -> Result<ApiResponse, AppError> {
        info!("Importing {} as {}", file.file_name, dataset_display_name);
        let request = ApiRequest::post(self.endpoint)
            .with_param("datasetDisplayName", dataset_display_name)
            .with_optional_param("nameConflict", name_conflict)
            .with_file(file);
        self.session.make_request(request).await
    }

    /// Imports a file into the specified workspace
    pub async fn post_import_in_group(
        &self,
        group_id: &str,
        dataset_display_name: &str,
        name_conflict: Option<&str>,
        file: FileUpload,
    ) -> Result<ApiResponse, AppError> {
        info!(
            "Importing {} as {} in group {}",
            file.file_name, dataset_display_name, group_id
        );
        let endpoint = format!("myorg/groups/{group_id}/imports");
        let request = ApiRequest::post(endpoint)
            .with_param("datasetDisplayName", dataset_display_name)
            .with_optional_param("nameConflict", name_conflict)
            .with_file(file);
        self.session.make_request(request).await
    }
}
