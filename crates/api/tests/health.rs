mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_scientist, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_schema_and_counts(pool: SqlitePool) {
    create_scientist(&pool, "Ada", "Physics").await;

    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["store"]["schema_version"], 20260101000003_i64);
    assert_eq!(json["store"]["scientists"], 1);
    assert_eq!(json["store"]["planets"], 0);
    assert_eq!(json["store"]["missions"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_propagated(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_unavailable_when_pool_closed(pool: SqlitePool) {
    pool.close().await;
    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "unavailable");
    assert!(json["store"].is_null());
}
