use powerbi_client::application::config::Config;
use powerbi_client::client::PowerBiClient;
use powerbi_client::utils::setup_logger;
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let Some(dataset_id) = env::args().nth(1) else {
        warn!("Usage: refresh_dataset <dataset-id>");
        return Ok(());
    };

    let client = PowerBiClient::from_config(Config::new()).await?;

    let response = client.datasets().refresh_dataset(&dataset_id).await?;
    info!("Refresh requested, status: {:?}", response.status_code());

    let history = client
        .datasets()
        .get_refresh_history(&dataset_id, Some(5))
        .await?;
    info!(
        "Latest refreshes: {}",
        serde_json::to_string_pretty(&history.json())?
    );

    Ok(())
}
