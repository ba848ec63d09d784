//! Repository for the `missions` table.

use sqlx::SqlitePool;
use starlog_core::types::DbId;

use crate::models::mission::{CreateMission, Mission};

const COLUMNS: &str = "id, name, scientist_id, planet_id";

/// Provides create and read operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    ///
    /// A dangling `scientist_id` or `planet_id` fails with a foreign key
    /// violation from the database.
    pub async fn create(pool: &SqlitePool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (name, scientist_id, planet_id)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(input.scientist_id)
            .bind(input.planet_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = ?");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all missions in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// List the missions belonging to one scientist.
    pub async fn list_by_scientist(
        pool: &SqlitePool,
        scientist_id: DbId,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE scientist_id = ? ORDER BY id");
        sqlx::query_as::<_, Mission>(&query)
            .bind(scientist_id)
            .fetch_all(pool)
            .await
    }
}
