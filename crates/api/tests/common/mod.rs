#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use starlog_api::config::ServerConfig;
use starlog_api::router::build_app_router;
use starlog_api::state::AppState;
use starlog_db::models::planet::{CreatePlanet, Planet};
use starlog_db::repositories::PlanetRepo;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".parse().unwrap()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, body).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Insert a planet directly; there is no HTTP route for creating planets.
pub async fn seed_planet(pool: &SqlitePool, name: &str) -> Planet {
    PlanetRepo::create(
        pool,
        &CreatePlanet {
            name: Some(name.to_string()),
            distance_from_earth: Some(1_000),
            nearest_star: Some("Sol".to_string()),
        },
    )
    .await
    .unwrap()
}

/// Create a scientist over HTTP and return its id.
pub async fn create_scientist(pool: &SqlitePool, name: &str, field: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/scientists",
        serde_json::json!({"name": name, "field_of_study": field}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a mission over HTTP and return its id.
pub async fn create_mission(pool: &SqlitePool, name: &str, scientist_id: i64, planet_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/missions",
        serde_json::json!({
            "name": name,
            "scientist_id": scientist_id,
            "planet_id": planet_id,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
