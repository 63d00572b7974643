use crate::common::{assert_not_found, assert_request, not_found_client, ok_client};
use assert_json_diff::assert_json_eq;
use powerbi_client::prelude::*;

fn sales_dataset() -> Value {
    json!({
        "name": "SalesMarketing",
        "defaultMode": "Push",
        "tables": [{
            "name": "Product",
            "columns": [
                {"name": "ProductID", "dataType": "Int64"},
                {"name": "Name", "dataType": "string"}
            ]
        }]
    })
}

#[tokio::test]
async fn test_post_dataset_with_retention_policy() {
    let client = ok_client();
    client
        .push_datasets()
        .post_dataset(sales_dataset(), Some("basicFIFO"))
        .await
        .unwrap();

    let request = client.session().last();
    assert_request(&request, Method::POST, "myorg/datasets");
    assert_eq!(
        request.params,
        vec![("defaultRetentionPolicy".to_string(), "basicFIFO".to_string())]
    );
    assert_json_eq!(request.json.unwrap(), sales_dataset());
}

#[tokio::test]
async fn test_post_dataset_in_group_without_retention_policy() {
    let client = ok_client();
    client
        .push_datasets()
        .post_dataset_in_group("g1", sales_dataset(), None)
        .await
        .unwrap();

    let request = client.session().last();
    assert_request(&request, Method::POST, "myorg/groups/g1/datasets");
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn test_rows_are_wrapped() {
    let client = ok_client();
    let rows = json!([{"ProductID": 1, "Name": "Adjustable Race"}]);

    client
        .push_datasets()
        .post_rows("d1", "Product", rows.clone())
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(&request, Method::POST, "myorg/datasets/d1/tables/Product/rows");
    assert_json_eq!(request.json.unwrap(), json!({ "rows": rows.clone() }));

    client
        .push_datasets()
        .post_group_rows("g1", "d1", "Product", rows.clone())
        .await
        .unwrap();
    let request = client.session().last();
    assert_request(
        &request,
        Method::POST,
        "myorg/groups/g1/datasets/d1/tables/Product/rows",
    );
    assert_json_eq!(request.json.unwrap(), json!({ "rows": rows }));
}

#[tokio::test]
async fn test_tables_and_row_deletion() {
    let client = ok_client();
    let push = client.push_datasets();
    let table = json!({"name": "Product", "columns": []});

    push.get_tables("d1").await.unwrap();
    push.get_group_tables("g1", "d1").await.unwrap();
    push.put_table("d1", "Product", table.clone()).await.unwrap();
    push.put_group_table("g1", "d1", "Product", table).await.unwrap();
    push.delete_rows("d1", "Product").await.unwrap();
    push.delete_group_rows("g1", "d1", "Product").await.unwrap();

    let expected = [
        (Method::GET, "myorg/datasets/d1/tables"),
        (Method::GET, "myorg/groups/g1/datasets/d1/tables"),
        (Method::PUT, "myorg/datasets/d1/tables/Product"),
        (Method::PUT, "myorg/groups/g1/datasets/d1/tables/Product"),
        (Method::DELETE, "myorg/datasets/d1/tables/Product/rows"),
        (Method::DELETE, "myorg/groups/g1/datasets/d1/tables/Product/rows"),
    ];
    let requests = client.session().requests();
    assert_eq!(requests.len(), expected.len());
    for (request, (method, endpoint)) in requests.iter().zip(expected) {
        assert_request(request, method, endpoint);
    }
}

#[tokio::test]
async fn test_all_methods_propagate_not_found() {
    let client = not_found_client();
    let push = client.push_datasets();

    assert_not_found(push.get_tables("d1").await);
    assert_not_found(push.get_group_tables("g1", "d1").await);
    assert_not_found(push.post_dataset(json!({}), None).await);
    assert_not_found(push.post_dataset_in_group("g1", json!({}), None).await);
    assert_not_found(push.put_table("d1", "t", json!({})).await);
    assert_not_found(push.put_group_table("g1", "d1", "t", json!({})).await);
    assert_not_found(push.post_rows("d1", "t", json!([])).await);
    assert_not_found(push.post_group_rows("g1", "d1", "t", json!([])).await);
    assert_not_found(push.delete_rows("d1", "t").await);
    assert_not_found(push.delete_group_rows("g1", "d1", "t").await);
}
