use powerbi_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting push rows example");

    let client = PowerBiClient::from_config(Config::new()).await?;

    let dataset = json!({
        "name": "DemoPush",
        "defaultMode": "Push",
        "tables": [{
            "name": "Readings",
            "columns": [
                {"name": "Sensor", "dataType": "string"},
                {"name": "Value", "dataType": "Double"},
                {"name": "Timestamp", "dataType": "DateTime"}
            ]
        }]
    });
    let created = client
        .push_datasets()
        .post_dataset(dataset, Some("basicFIFO"))
        .await?;
    let Some(dataset_id) = created.json().and_then(|body| body["id"].as_str()) else {
        warn!("Dataset created without an id: {:?}", created);
        return Ok(());
    };
    info!("✓ Created push dataset {}", dataset_id);

    let rows = json!([
        {"Sensor": "boiler", "Value": 71.5, "Timestamp": "2026-10-19T08:00:00Z"},
        {"Sensor": "boiler", "Value": 72.1, "Timestamp": "2026-10-19T08:05:00Z"}
    ]);
    client
        .push_datasets()
        .post_rows(dataset_id, "Readings", rows)
        .await?;
    info!("✓ Rows pushed");

    Ok(())
}
