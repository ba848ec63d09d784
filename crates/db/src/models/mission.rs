//! Mission entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlog_core::types::DbId;
use validator::Validate;

use crate::models::planet::Planet;
use crate::models::scientist::Scientist;

/// A mission row from the `missions` table. Serializes as the flat view.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Validate)]
pub struct Mission {
    pub id: DbId,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub scientist_id: DbId,
    #[validate(range(min = 1))]
    pub planet_id: DbId,
}

/// DTO for creating a new mission.
///
/// The rules only cover shape; whether the referenced scientist and planet
/// exist is checked against the database by the caller.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMission {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, range(min = 1))]
    pub scientist_id: Option<DbId>,
    #[validate(required, range(min = 1))]
    pub planet_id: Option<DbId>,
}

/// A mission with its scientist and planet, both as flat views.
#[derive(Debug, Clone, Serialize)]
pub struct MissionDetail {
    pub id: DbId,
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
    pub scientist: Scientist,
    pub planet: Planet,
}

impl MissionDetail {
    pub fn new(mission: Mission, scientist: Scientist, planet: Planet) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            scientist,
            planet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlog_core::validation::validate;

    #[test]
    fn zero_ids_and_blank_name_are_rejected() {
        let input = CreateMission {
            name: Some(String::new()),
            scientist_id: Some(0),
            planet_id: None,
        };
        let errors = validate(&input).unwrap_err();
        assert!(errors.has("name", "length"));
        assert!(errors.has("scientist_id", "range"));
        assert!(errors.has("planet_id", "required"));
    }

    #[test]
    fn stored_row_rules_match_create_rules() {
        let mission = Mission {
            id: 1,
            name: "Deep Survey".to_string(),
            scientist_id: 1,
            planet_id: 0,
        };
        let errors = validate(&mission).unwrap_err();
        assert_eq!(errors.fields(), vec!["planet_id"]);
    }

    #[test]
    fn detail_nests_flat_scientist_and_planet() {
        let detail = MissionDetail::new(
            Mission {
                id: 4,
                name: "Deep Survey".to_string(),
                scientist_id: 1,
                planet_id: 2,
            },
            Scientist {
                id: 1,
                name: "Ada".to_string(),
                field_of_study: "Physics".to_string(),
            },
            Planet {
                id: 2,
                name: Some("Kepler-22b".to_string()),
                distance_from_earth: Some(600),
                nearest_star: Some("Kepler-22".to_string()),
            },
        );
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["scientist"]["name"], "Ada");
        assert_eq!(json["planet"]["nearest_star"], "Kepler-22");
        assert!(json["scientist"].get("missions").is_none());
        assert!(json["planet"].get("missions").is_none());
    }
}
