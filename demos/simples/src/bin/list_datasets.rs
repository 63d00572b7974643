use powerbi_client::application::config::Config;
use powerbi_client::client::PowerBiClient;
use powerbi_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting list datasets example");

    // Credentials come from POWERBI_* variables or a .env file
    let client = PowerBiClient::from_config(Config::new()).await?;
    info!("✓ Client created and authenticated");

    let groups = client.groups().get_groups(Some(10), None, None).await?;
    info!("Workspaces: {:#?}", groups.json());

    let datasets = client.datasets().get_datasets().await?;
    let names: Vec<&str> = datasets
        .json()
        .and_then(|body| body["value"].as_array())
        .map(|items| items.iter().filter_map(|d| d["name"].as_str()).collect())
        .unwrap_or_default();
    info!("Datasets in My Workspace: {:?}", names);

    Ok(())
}
