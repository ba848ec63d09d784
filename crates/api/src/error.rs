use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use starlog_core::error::CoreError;

/// Fixed message returned for every rejected create or update.
pub const VALIDATION_MESSAGE: &str = "validation errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's JSON error payloads:
///
/// - 400 `{"errors": ["validation errors"]}` for anything the client sent wrong
/// - 404 `{"error": "<Entity> not found"}`
/// - 500 `{"error": "An internal error occurred"}`
///
/// Field-level detail is logged, not returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `starlog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read into the expected DTO.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path id that cannot name any row of `entity`.
    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found(entity)
                }
                CoreError::Validation(errors) => {
                    tracing::debug!(
                        violations = errors.violations().len(),
                        %errors,
                        "Validation failed"
                    );
                    validation_failed()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request body");
                validation_failed()
            }
            AppError::InvalidId { entity, raw } => {
                tracing::debug!(entity, raw = %raw, "Unparseable path id");
                not_found(entity)
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn not_found(entity: &str) -> (StatusCode, Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "error": format!("{entity} not found") }),
    )
}

fn validation_failed() -> (StatusCode, Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "errors": [VALIDATION_MESSAGE] }),
    )
}

fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "An internal error occurred" }),
    )
}

/// Classify a sqlx error into an HTTP status and payload.
///
/// - `RowNotFound` maps to 404.
/// - Constraint violations (foreign key, check, not-null, unique) map to the
///   400 validation payload.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => not_found("Resource"),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            sqlx::error::ErrorKind::Other => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
            kind => {
                tracing::debug!(?kind, error = %db_err, "Constraint violation");
                validation_failed()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
