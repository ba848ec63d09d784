//! Handlers for the `/scientists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starlog_core::error::CoreError;
use starlog_core::types::DbId;
use starlog_core::validation::validate;
use starlog_db::models::scientist::{
    CreateScientist, Scientist, ScientistDetail, UpdateScientist,
};
use starlog_db::repositories::ScientistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Scientist",
        id,
    })
}

/// GET /scientists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Scientist>>> {
    let scientists = ScientistRepo::list(&state.pool).await?;
    Ok(Json(scientists))
}

/// POST /scientists
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateScientist>,
) -> AppResult<(StatusCode, Json<ScientistDetail>)> {
    validate(&input).map_err(CoreError::from)?;

    let scientist = ScientistRepo::create(&state.pool, &input).await?;
    tracing::info!(scientist_id = scientist.id, "Scientist created");

    Ok((
        StatusCode::CREATED,
        Json(ScientistDetail::new(scientist, Vec::new())),
    ))
}

/// GET /scientists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId { id, .. }: EntityId<Scientist>,
) -> AppResult<Json<ScientistDetail>> {
    let scientist = ScientistRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(scientist))
}

/// PATCH /scientists/{id}
///
/// The body is only inspected once the scientist is known to exist, so a
/// missing id answers 404 regardless of the payload.
pub async fn update(
    State(state): State<AppState>,
    EntityId { id, .. }: EntityId<Scientist>,
    body: Result<JsonBody<UpdateScientist>, AppError>,
) -> AppResult<(StatusCode, Json<ScientistDetail>)> {
    let current = ScientistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let JsonBody(patch) = body?;
    let merged = patch.apply_to(current);
    validate(&merged).map_err(CoreError::from)?;

    ScientistRepo::update(&state.pool, &merged)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(scientist_id = id, "Scientist updated");

    let detail = ScientistRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::ACCEPTED, Json(detail)))
}

/// DELETE /scientists/{id}
///
/// Removes the scientist's missions with it.
pub async fn delete(
    State(state): State<AppState>,
    EntityId { id, .. }: EntityId<Scientist>,
) -> AppResult<StatusCode> {
    if ScientistRepo::delete(&state.pool, id).await? {
        tracing::info!(scientist_id = id, "Scientist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
