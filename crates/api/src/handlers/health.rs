use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use starlog_db::status::{store_status, StoreStatus};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    /// `null` when the store could not be read.
    pub store: Option<StoreStatus>,
}

/// GET /health -- 200 with the store snapshot, 503 when it is unreadable.
pub async fn show(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let version = env!("CARGO_PKG_VERSION");
    match store_status(&state.pool).await {
        Ok(store) => (
            StatusCode::OK,
            Json(Health {
                status: "ok",
                version,
                store: Some(store),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Store status unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                    version,
                    store: None,
                }),
            )
        }
    }
}
