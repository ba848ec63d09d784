//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::Json;
use starlog_db::models::planet::Planet;
use starlog_db::repositories::PlanetRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}
