mod common;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/subscription_tiers"))
        .and(query_param("order", "price.asc"))
        .and(header("apikey", "project-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "t-free", "name": "Free", "price": 0, "features": [],
             "max_quality": "SD", "max_devices": 1},
            {"id": "t-premium", "name": "Premium", "price": 19.99, "features": ["4K"],
             "max_quality": "4K", "max_devices": 4}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/movies"))
        .and(query_param("order", "rating.desc"))
        .and(header("apikey", "project-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m-1", "title": "Gated", "description": "", "release_year": 2022,
             "duration_minutes": 130, "rating": 8.8, "poster_url": "", "backdrop_url": "",
             "genres": ["Sci-Fi"], "required_tier": "t-premium", "is_featured": true},
            {"id": "m-2", "title": "Open", "description": "", "release_year": 2019,
             "duration_minutes": 90, "rating": 7.2, "poster_url": "", "backdrop_url": "",
             "genres": [], "required_tier": null, "is_featured": false}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn anonymous_catalog_is_read_with_the_project_key() {
    let backend = MockServer::start().await;
    mount_catalog(&backend).await;
    let app = common::spawn_app_with_backend(backend.uri()).await;

    let body: Value = app
        .get("/movies", None)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let cards = body["list"].as_array().unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["locked"], true);
    assert_eq!(cards[0]["runtime"], "2h 10m");
    assert_eq!(cards[1]["locked"], false);
}

#[tokio::test]
async fn signed_in_user_is_resolved_once_and_unlocked() {
    let backend = MockServer::start().await;
    mount_catalog(&backend).await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1", "email": "viewer@example.com", "role": "authenticated"
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_subscriptions"))
        .and(query_param("user_id", "eq.user-1"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "sub-1", "user_id": "user-1", "tier_id": "t-premium", "status": "active"
        }])))
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_watchlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w-1", "user_id": "user-1", "movie_id": "m-2"}
        ])))
        .mount(&backend)
        .await;
    let app = common::spawn_app_with_backend(backend.uri()).await;

    for _ in 0..2 {
        let body: Value = app
            .get("/movies", Some("user-jwt"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let cards = body["list"].as_array().unwrap();

        assert!(cards.iter().all(|card| card["locked"] == false));
        assert_eq!(cards[1]["in_watchlist"], true);
    }
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid JWT"))
        .mount(&backend)
        .await;
    let app = common::spawn_app_with_backend(backend.uri()).await;

    let response = app.get("/movies", Some("expired")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn catalog_outage_fails_the_request() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/subscription_tiers"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backend)
        .await;
    let app = common::spawn_app_with_backend(backend.uri()).await;

    let response = app.get("/movies", None).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 503);
}
