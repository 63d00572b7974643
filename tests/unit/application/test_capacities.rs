use crate::common::{assert_not_found, assert_request, not_found_client, ok_client};
use assert_json_diff::assert_json_eq;
use powerbi_client::prelude::*;

#[tokio::test]
async fn test_capacities_and_workloads() {
    let client = ok_client();
    let capacities = client.capacities();

    capacities.get_capacities().await.unwrap();
    assert_request(&client.session().last(), Method::GET, "myorg/capacities");

    capacities.get_workloads("c1").await.unwrap();
    assert_request(
        &client.session().last(),
        Method::GET,
        "myorg/capacities/c1/Workloads",
    );

    capacities.get_workload("c1", "Dataflows").await.unwrap();
    assert_request(
        &client.session().last(),
        Method::GET,
        "myorg/capacities/c1/Workloads/Dataflows",
    );
}

#[tokio::test]
async fn test_patch_workload_body() {
    let client = ok_client();
    let capacities = client.capacities();

    capacities
        .patch_workload("c1", "Dataflows", "Enabled", Some(40))
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::PATCH, "myorg/capacities/c1/Workloads/Dataflows");
    assert_json_eq!(
        request.json.unwrap(),
        json!({"state": "Enabled", "maxMemoryPercentageSetByUser": 40})
    );

    capacities
        .patch_workload("c1", "Dataflows", "Disabled", None)
        .await
        .unwrap();
    assert_json_eq!(
        client.session().last().json.unwrap(),
        json!({"state": "Disabled"})
    );
}

#[tokio::test]
async fn test_refreshables() {
    let client = ok_client();
    let capacities = client.capacities();

    capacities
        .get_refreshables(10, Some("capacity,group"), None, Some(5))
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::GET, "myorg/capacities/refreshables?$top=10");
    assert_eq!(
        request.params,
        vec![
            ("$expand".to_string(), "capacity,group".to_string()),
            ("$skip".to_string(), "5".to_string()),
        ]
    );

    capacities
        .get_refreshables_for_capacity("c1", 3, None, Some("averageDuration gt 30"), None)
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::GET, "myorg/capacities/c1/Refreshables?$top=3");
    assert_eq!(
        request.params,
        vec![("$filter".to_string(), "averageDuration gt 30".to_string())]
    );

    capacities
        .get_refreshable_for_capacity("c1", "r1", None)
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::GET, "myorg/capacities/c1/Refreshables/r1");
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn test_assign_workspaces() {
    let client = ok_client();
    let body = json!({
        "capacityMigrationAssignments": [{
            "workspacesToAssign": ["g1"],
            "targetCapacityObjectId": "c1"
        }]
    });

    client
        .capacities()
        .assign_workspaces_to_capacity(body.clone())
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::POST, "myorg/admin/capacities/AssignWorkspaces");
    assert_json_eq!(request.json.unwrap(), body);
}

#[tokio::test]
async fn test_all_methods_propagate_not_found() {
    let client = not_found_client();
    let capacities = client.capacities();

    assert_not_found(capacities.get_capacities().await);
    assert_not_found(capacities.get_workloads("c1").await);
    assert_not_found(capacities.get_workload("c1", "w").await);
    assert_not_found(capacities.patch_workload("c1", "w", "Enabled", None).await);
    assert_not_found(capacities.get_refreshables(1, None, None, None).await);
    assert_not_found(capacities.get_refreshables_for_capacity("c1", 1, None, None, None).await);
    assert_not_found(capacities.get_refreshable_for_capacity("c1", "r1", None).await);
    assert_not_found(capacities.assign_workspaces_to_capacity(json!({})).await);
}
