//! Planet entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlog_core::types::DbId;
use validator::Validate;

/// A planet row from the `planets` table.
///
/// Planets declare no validation rules; the derive is kept so every entity
/// goes through the same validation entry point.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Validate)]
pub struct Planet {
    pub id: DbId,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

/// DTO for creating a new planet.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlog_core::validation::validate;

    #[test]
    fn planets_have_no_required_fields() {
        let blank = Planet {
            id: 1,
            name: None,
            distance_from_earth: None,
            nearest_star: None,
        };
        assert!(validate(&blank).is_ok());
        assert!(validate(&CreatePlanet::default()).is_ok());
    }
}
