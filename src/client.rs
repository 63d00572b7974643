/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Main entry point to the Power BI REST services
//!
//! [`PowerBiClient`] wraps an authenticated dispatcher and hands out one
//! lightweight service view per resource family. Views are built on every
//! call and only borrow the shared session.
//!
//! # Example
//! ```ignore
//! use powerbi_client::client::PowerBiClient;
//! use powerbi_client::application::config::Config;
//!
//! let client = PowerBiClient::from_config(Config::new()).await?;
//!
//! let groups = client.groups().get_groups(Some(10), None, None).await?;
//! let status = client.datasets().refresh_dataset("dataset-id").await?;
//! ```

use crate::application::config::Config;
use crate::application::services::{
    Apps, AvailableFeatures, Capacities, Dashboards, DataflowStorageAccounts, Dataflows, Datasets,
    Groups, Imports, Pipelines, PushDatasets, Reports, TemplateApps, Users,
};
use crate::error::AppError;
use crate::model::http::PowerBiSession;
use crate::session::interface::Dispatcher;
use std::sync::Arc;

/// Client for the Power BI REST API
pub struct PowerBiClient<D: Dispatcher = PowerBiSession> {
    session: Arc<D>,
}

impl<D: Dispatcher> PowerBiClient<D> {
    /// Creates a client over an authenticated dispatcher
    pub fn new(session: D) -> Self {
        Self {
            session: Arc::new(session),
        }
    }

    /// Creates a client over a dispatcher shared with other owners
    pub fn from_shared(session: Arc<D>) -> Self {
        Self { session }
    }

    /// Gets a reference to the underlying dispatcher
    pub fn session(&self) -> &D {
        &self.session
    }

    /// Used to access the `Apps` services
    pub fn apps(&self) -> Apps<'_, D> {
        Apps::new(&self.session)
    }

    /// Used to access the `AvailableFeatures` services
    pub fn available_features(&self) -> AvailableFeatures<'_, D> {
        AvailableFeatures::new(&self.session)
    }

    /// Used to access the `Capacities` services
    pub fn capacities(&self) -> Capacities<'_, D> {
        Capacities::new(&self.session)
    }

    /// Used to access the `Dashboards` services
    pub fn dashboards(&self) -> Dashboards<'_, D> {
        Dashboards::new(&self.session)
    }

    /// Used to access the `DataflowStorageAccounts` services
    pub fn dataflow_storage_accounts(&self) -> DataflowStorageAccounts<'_, D> {
        DataflowStorageAccounts::new(&self.session)
    }

    /// Used to access the `Dataflows` services
    pub fn dataflows(&self) -> Dataflows<'_, D> {
        Dataflows::new(&self.session)
    }

    /// Used to access the `Datasets` services
    pub fn datasets(&self) -> Datasets<'_, D> {
        Datasets::new(&self.session)
    }

    /// Used to access the `Groups` services
    pub fn groups(&self) -> Groups<'_, D> {
        Groups::new(&self.session)
    }

    /// Used to access the `Imports` services
    pub fn imports(&self) -> Imports<'_, D> {
        Imports::new(&self.session)
    }

    /// Used to access the `Pipelines` services
    pub fn pipelines(&self) -> Pipelines<'_, D> {
        Pipelines::new(&self.session)
    }

    /// Used to access the `PushDatasets` services
    pub fn push_datasets(&self) -> PushDatasets<'_, D> {
        PushDatasets::new(&self.session)
    }

    /// Used to access the `Reports` services
    pub fn reports(&self) -> Reports<'_, D> {
        Reports::new(&self.session)
    }

    /// Used to access the `TemplateApps` services
    pub fn template_apps(&self) -> TemplateApps<'_, D> {
        TemplateApps::new(&self.session)
    }

    /// Used to access the `Users` services
    pub fn users(&self) -> Users<'_, D> {
        Users::new(&self.session)
    }
}

impl PowerBiClient<PowerBiSession> {
    /// Authenticates with the given configuration and creates a client
    ///
    /// # Returns
    /// * `Ok(PowerBiClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let session = PowerBiSession::new(config).await?;
        Ok(Self::new(session))
    }
}

impl<D: Dispatcher> Clone for PowerBiClient<D> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}
