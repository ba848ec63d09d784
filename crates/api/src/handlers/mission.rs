//! Handlers for the `/missions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starlog_core::error::CoreError;
use starlog_core::types::DbId;
use starlog_core::validation::{validate, ValidationErrors, CODE_UNKNOWN_REFERENCE};
use starlog_db::models::mission::{CreateMission, Mission, MissionDetail};
use starlog_db::repositories::{MissionRepo, PlanetRepo, ScientistRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

fn unknown_reference(field: &str) -> AppError {
    AppError::Core(CoreError::Validation(ValidationErrors::single(
        field,
        CODE_UNKNOWN_REFERENCE,
    )))
}

/// GET /missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mission>>> {
    let missions = MissionRepo::list(&state.pool).await?;
    Ok(Json(missions))
}

/// POST /missions
///
/// Rejects the mission when its scientist or planet does not exist.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMission>,
) -> AppResult<(StatusCode, Json<MissionDetail>)> {
    validate(&input).map_err(CoreError::from)?;

    // `validate` guarantees both ids are present.
    let scientist_id = input.scientist_id.unwrap_or_default();
    let planet_id = input.planet_id.unwrap_or_default();

    let scientist = ScientistRepo::find_by_id(&state.pool, scientist_id)
        .await?
        .ok_or_else(|| unknown_reference("scientist_id"))?;
    let planet = PlanetRepo::find_by_id(&state.pool, planet_id)
        .await?
        .ok_or_else(|| unknown_reference("planet_id"))?;

    let mission = MissionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        mission_id = mission.id,
        scientist_id,
        planet_id,
        "Mission created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MissionDetail::new(mission, scientist, planet)),
    ))
}

/// GET /missions/{id}
///
/// Answers 404 naming whichever record is missing: the mission itself, or a
/// parent removed while foreign key enforcement was off.
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId { id, .. }: EntityId<Mission>,
) -> AppResult<Json<MissionDetail>> {
    let mission = MissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Mission", id))?;
    let scientist = ScientistRepo::find_by_id(&state.pool, mission.scientist_id)
        .await?
        .ok_or_else(|| not_found("Scientist", mission.scientist_id))?;
    let planet = PlanetRepo::find_by_id(&state.pool, mission.planet_id)
        .await?
        .ok_or_else(|| not_found("Planet", mission.planet_id))?;

    Ok(Json(MissionDetail::new(mission, scientist, planet)))
}
