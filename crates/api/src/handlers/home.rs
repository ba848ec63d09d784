use axum::http::StatusCode;

/// GET / -- empty 200.
pub async fn index() -> StatusCode {
    StatusCode::OK
}
