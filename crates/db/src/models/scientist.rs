//! Scientist entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlog_core::types::DbId;
use validator::Validate;

use crate::models::mission::Mission;
use crate::models::present;

/// A scientist row from the `scientists` table. Serializes as the flat view.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Validate)]
pub struct Scientist {
    pub id: DbId,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub field_of_study: String,
}

/// DTO for creating a new scientist. Absent fields fail the `required` rule.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateScientist {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub field_of_study: Option<String>,
}

/// DTO for a partial update.
///
/// Only the fields listed here may be changed; any other key (including
/// `id`) is rejected at deserialization. An explicit `null` is applied as an
/// empty value so that the merged record fails validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientist {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub field_of_study: Option<Option<String>>,
}

impl UpdateScientist {
    /// Merge this patch into `scientist`, field by field.
    pub fn apply_to(self, mut scientist: Scientist) -> Scientist {
        if let Some(name) = self.name {
            scientist.name = name.unwrap_or_default();
        }
        if let Some(field_of_study) = self.field_of_study {
            scientist.field_of_study = field_of_study.unwrap_or_default();
        }
        scientist
    }
}

/// A scientist together with its missions.
///
/// Nested missions are flat: they carry `scientist_id` and `planet_id` but
/// neither the scientist nor the planet record.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistDetail {
    pub id: DbId,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<Mission>,
}

impl ScientistDetail {
    pub fn new(scientist: Scientist, missions: Vec<Mission>) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions,
        }
    }
}
