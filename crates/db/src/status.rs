//! Schema and row-count snapshot of the store.

use serde::Serialize;
use sqlx::FromRow;

use crate::DbPool;

/// What the store currently holds.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StoreStatus {
    /// Highest successfully applied migration; `None` before the first run.
    pub schema_version: Option<i64>,
    pub scientists: i64,
    pub planets: i64,
    pub missions: i64,
}

/// Read the applied schema version and the size of each table.
///
/// Fails if the database is unreachable or the tables have not been created.
pub async fn store_status(pool: &DbPool) -> Result<StoreStatus, sqlx::Error> {
    sqlx::query_as::<_, StoreStatus>(
        "SELECT
            (SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1) AS schema_version,
            (SELECT COUNT(*) FROM scientists) AS scientists,
            (SELECT COUNT(*) FROM planets) AS planets,
            (SELECT COUNT(*) FROM missions) AS missions",
    )
    .fetch_one(pool)
    .await
}
