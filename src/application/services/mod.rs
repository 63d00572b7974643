/// Module containing the apps services
pub mod apps;
/// Module containing the available features services
pub mod available_features;
/// Module containing the capacities services
pub mod capacities;
/// Module containing the dashboards services
pub mod dashboards;
/// Module containing the dataflow storage accounts services
pub mod dataflow_storage_accounts;
/// Module containing the dataflows services
pub mod dataflows;
/// Module containing the datasets services
pub mod datasets;
/// Module containing the groups (workspaces) services
pub mod groups;
/// Module containing the imports services
pub mod imports;
/// Module containing the deployment pipelines services
pub mod pipelines;
/// Module containing the push datasets services
pub mod push_datasets;
/// Module containing the reports services
pub mod reports;
/// Module containing the template apps services
pub mod template_apps;
/// Module containing the users services
pub mod users;

pub use apps::Apps;
pub use available_features::AvailableFeatures;
pub use capacities::Capacities;
pub use dashboards::{CloneTileRequest, Dashboards};
pub use dataflow_storage_accounts::DataflowStorageAccounts;
pub use dataflows::Dataflows;
pub use datasets::Datasets;
pub use groups::Groups;
pub use imports::Imports;
pub use pipelines::Pipelines;
pub use push_datasets::PushDatasets;
pub use reports::Reports;
pub use template_apps::TemplateApps;
pub use users::Users;
