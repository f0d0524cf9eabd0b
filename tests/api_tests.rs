//! API integration tests
//!
//! Expect a running server and database. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000/api";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_machine_crud_round_trip() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&json!({
            "name": "DESKTOP-TEST",
            "machineID": 9901,
            "category": "máquina",
            "status": "disponível",
            "ram": "8GB"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No machine ID");
    assert_eq!(body["machineID"], 9901);

    // Empty update only moves the timestamp
    let response = client
        .put(format!("{}/machines/{}", BASE_URL, id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["name"], "DESKTOP-TEST");
    assert_eq!(updated["ram"], "8GB");

    // Delete, then the ID is gone
    let response = client
        .delete(format!("{}/machines/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/machines/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // And the list no longer carries it
    let response = client
        .get(format!("{}/machines", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let list: Value = response.json().await.expect("Failed to parse response");
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["id"].as_i64() != Some(id)));
}

#[tokio::test]
#[ignore]
async fn test_machine_missing_machine_id_is_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&json!({
            "name": "DESKTOP-NOID",
            "category": "máquina",
            "status": "disponível"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .contains("machineID"));
}

#[tokio::test]
#[ignore]
async fn test_machine_rejects_unknown_status_token() {
    let client = Client::new();

    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&json!({
            "name": "DESKTOP-BAD",
            "machineID": 9902,
            "category": "máquina",
            "status": "in-use"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_machine_id_is_rejected() {
    let client = Client::new();

    let payload = json!({
        "name": "DESKTOP-DUP",
        "machineID": 9903,
        "category": "máquina",
        "status": "disponível"
    });

    let first = client
        .post(format!("{}/machines", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);
    let body: Value = first.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No machine ID");

    let second = client
        .post(format!("{}/machines", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);

    // Cleanup
    let _ = client
        .delete(format!("{}/machines/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_duplicate_location_name_is_rejected() {
    let client = Client::new();

    let first = client
        .post(format!("{}/locations", BASE_URL))
        .json(&json!({ "name": "Sala A" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);
    let body: Value = first.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No location ID");

    let second = client
        .post(format!("{}/locations", BASE_URL))
        .json(&json!({ "name": "Sala A" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);

    // Cleanup
    let _ = client
        .delete(format!("{}/locations/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_chip_validation() {
    let client = Client::new();

    // Four-digit ip suffix is out of pattern
    let response = client
        .post(format!("{}/chips", BASE_URL))
        .json(&json!({
            "ip": "1234",
            "number": "79 9 9999-0000",
            "carrier": "Vivo",
            "consultant": "Ana",
            "status": "Ativo"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Unknown carrier
    let response = client
        .post(format!("{}/chips", BASE_URL))
        .json(&json!({
            "ip": "42",
            "number": "79 9 9999-0000",
            "carrier": "Nextel",
            "consultant": "Ana",
            "status": "Ativo"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_telsystem_assign_is_an_upsert() {
    let client = Client::new();

    let first = client
        .post(format!("{}/telsystems/assign", BASE_URL))
        .json(&json!({
            "number": "79 9 8888-0000",
            "type": "Wtt1",
            "consultant": "Bruno"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(first.status().is_success());
    let first: Value = first.json().await.expect("Failed to parse response");
    let id = first["id"].as_i64().expect("No line ID");

    // Same (number, type) again lands on the same row
    let second = client
        .post(format!("{}/telsystems/assign", BASE_URL))
        .json(&json!({
            "number": "79 9 8888-0000",
            "type": "Wtt1",
            "consultant": "Carla"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(second.status().is_success());
    let second: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(second["id"].as_i64(), Some(id));
    assert_eq!(second["consultant"], "Carla");

    // Cleanup
    let _ = client
        .delete(format!("{}/telsystems/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_user_migration_from_machines() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users/migrate-from-machines", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ok"], true);
    assert!(body["inserted"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_wol_rejects_malformed_mac() {
    let client = Client::new();

    let response = client
        .post(format!("{}/wol", BASE_URL))
        .json(&json!({ "mac": "not-a-mac" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/wol", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}
