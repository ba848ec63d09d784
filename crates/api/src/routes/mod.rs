pub mod mission;
pub mod planet;
pub mod scientist;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        empty 200
/// /health                  schema version and row counts
///
/// /scientists              list, create
/// /scientists/{id}         get (with missions), patch, delete (cascades)
///
/// /planets                 list
///
/// /missions                list, create
/// /missions/{id}           get (with scientist and planet)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health::show))
        .nest("/scientists", scientist::router())
        .nest("/planets", planet::router())
        .nest("/missions", mission::router())
}
