//! HTTP-level integration tests for the `/planets` endpoint and the root.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, create_mission, create_scientist, get, seed_planet};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_root_returns_empty_200(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_planets_is_flat(pool: SqlitePool) {
    let vulcan = seed_planet(&pool, "Vulcan").await;
    seed_planet(&pool, "Kepler-22b").await;
    let scientist_id = create_scientist(&pool, "Ada", "Physics").await;
    create_mission(&pool, "Survey", scientist_id, vulcan.id).await;

    let response = get(build_test_app(pool), "/planets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let planets = body.as_array().unwrap();
    assert_eq!(planets.len(), 2);
    assert_eq!(
        planets[0],
        json!({
            "id": vulcan.id,
            "name": "Vulcan",
            "distance_from_earth": 1000,
            "nearest_star": "Sol",
        })
    );
    assert!(planets.iter().all(|p| p.get("missions").is_none()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_planets_empty(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/planets").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
