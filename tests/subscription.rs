mod common;

use cinemastream::connectors::catalog_store::mock::MockCatalogStore;
use common::{BASIC_TOKEN, BASIC_USER, FRESH_TOKEN, FRESH_USER, PREMIUM_TOKEN};
use serde_json::{json, Value};

async fn locked_ids(app: &common::TestApp, token: &str) -> Vec<String> {
    let body: Value = app
        .get("/movies", Some(token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    body["list"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|card| card["locked"] == true)
        .filter_map(|card| card["id"].as_str().map(String::from))
        .collect()
}

#[tokio::test]
async fn upgrading_from_basic_unlocks_premium_movies() {
    let app = common::spawn_app().await;
    assert_eq!(locked_ids(&app, BASIC_TOKEN).await, vec!["m-glass-harbor"]);

    let response = app
        .post("/subscription", Some(BASIC_TOKEN))
        .json(&json!({"tier_id": "premium"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["tier_id"], "premium");

    assert!(locked_ids(&app, BASIC_TOKEN).await.is_empty());
    // updated in place, not duplicated
    assert_eq!(app.store().subscriptions_of(BASIC_USER).await.len(), 1);
}

#[tokio::test]
async fn first_subscription_is_created() {
    let app = common::spawn_app().await;

    let missing = app.get("/subscription", Some(FRESH_TOKEN)).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let response = app
        .post("/subscription", Some(FRESH_TOKEN))
        .json(&json!({"tier_id": "basic"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app
        .get("/subscription", Some(FRESH_TOKEN))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["tier_id"], "basic");
    assert_eq!(body["item"]["status"], "active");
    assert_eq!(app.store().subscriptions_of(FRESH_USER).await.len(), 1);
}

#[tokio::test]
async fn subscribing_to_the_current_tier_conflicts() {
    let app = common::spawn_app().await;

    let response = app
        .post("/subscription", Some(PREMIUM_TOKEN))
        .json(&json!({"tier_id": "premium"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn invalid_tier_requests_are_rejected() {
    let app = common::spawn_app().await;

    let unknown = app
        .post("/subscription", Some(BASIC_TOKEN))
        .json(&json!({"tier_id": "platinum"}))
        .send()
        .await
        .unwrap();
    let empty = app
        .post("/subscription", Some(BASIC_TOKEN))
        .json(&json!({"tier_id": ""}))
        .send()
        .await
        .unwrap();
    let blank = app
        .post("/subscription", Some(BASIC_TOKEN))
        .json(&json!({"tier_id": "   "}))
        .send()
        .await
        .unwrap();
    let anonymous = app
        .post("/subscription", None)
        .json(&json!({"tier_id": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(unknown.status().as_u16(), 404);
    assert_eq!(empty.status().as_u16(), 422);
    assert_eq!(blank.status().as_u16(), 422);
    assert_eq!(anonymous.status().as_u16(), 401);
}

#[tokio::test]
async fn malformed_body_gets_a_json_envelope() {
    let app = common::spawn_app().await;

    let response = app
        .post("/subscription", Some(BASIC_TOKEN))
        .header("Content-Type", "application/json")
        .body(r#"{"tier_id": "basic\" oops"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json")));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["code"], 400);
    let detail: Value = serde_json::from_str(body["message"].as_str().unwrap()).unwrap();
    assert_eq!(detail["kind"], "deserialize");
    assert!(detail["msg"].as_str().unwrap().contains("EOF"));
}

#[tokio::test]
async fn failed_subscription_write_is_surfaced() {
    let store = MockCatalogStore::seeded().with_failing_writes();
    let app = common::spawn_app_with_store(store).await;

    let response = app
        .post("/subscription", Some(BASIC_TOKEN))
        .json(&json!({"tier_id": "premium"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 503);
    assert_eq!(locked_ids(&app, BASIC_TOKEN).await, vec!["m-glass-harbor"]);
}

#[tokio::test]
async fn session_reports_the_current_tier() {
    let app = common::spawn_app().await;

    let body: Value = app
        .get("/me", Some(BASIC_TOKEN))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["item"]["authenticated"], true);
    assert_eq!(body["item"]["user_id"], BASIC_USER);
    assert_eq!(body["item"]["email"], "basic@example.com");
    assert_eq!(body["item"]["tier_id"], "basic");

    let anonymous = app.get("/me", None).send().await.unwrap();
    assert_eq!(anonymous.status().as_u16(), 401);
}
