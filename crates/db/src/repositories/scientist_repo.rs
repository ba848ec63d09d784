//! Repository for the `scientists` table.

use sqlx::SqlitePool;
use starlog_core::types::DbId;

use crate::models::scientist::{CreateScientist, Scientist, ScientistDetail};
use crate::repositories::MissionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, field_of_study";

/// Provides CRUD operations for scientists.
pub struct ScientistRepo;

impl ScientistRepo {
    /// Insert a new scientist, returning the created row.
    ///
    /// The input is expected to have passed validation; a `None` field still
    /// fails on the `NOT NULL` constraint.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateScientist,
    ) -> Result<Scientist, sqlx::Error> {
        let query = format!(
            "INSERT INTO scientists (name, field_of_study)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(&input.name)
            .bind(&input.field_of_study)
            .fetch_one(pool)
            .await
    }

    /// Find a scientist by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists WHERE id = ?");
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a scientist and its missions.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ScientistDetail>, sqlx::Error> {
        let Some(scientist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let missions = MissionRepo::list_by_scientist(pool, id).await?;
        Ok(Some(ScientistDetail::new(scientist, missions)))
    }

    /// List all scientists in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists ORDER BY id");
        sqlx::query_as::<_, Scientist>(&query).fetch_all(pool).await
    }

    /// Overwrite the mutable columns of `scientist.id` with the given values.
    ///
    /// Returns `None` if no row with that ID exists.
    pub async fn update(
        pool: &SqlitePool,
        scientist: &Scientist,
    ) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!(
            "UPDATE scientists SET
                name = ?,
                field_of_study = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(&scientist.name)
            .bind(&scientist.field_of_study)
            .bind(scientist.id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a scientist and all of its missions in one transaction.
    ///
    /// Returns `true` if the scientist existed. Missions are removed
    /// explicitly as well as by `fk_missions_scientist_id_scientists`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let missions = sqlx::query("DELETE FROM missions WHERE scientist_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM scientists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(
            scientist_id = id,
            missions_removed = missions.rows_affected(),
            "Scientist deleted with cascade"
        );
        Ok(true)
    }
}
