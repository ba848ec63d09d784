//! Demo data for local development.

use crate::models::mission::CreateMission;
use crate::models::planet::CreatePlanet;
use crate::models::scientist::CreateScientist;
use crate::repositories::{MissionRepo, PlanetRepo, ScientistRepo};
use crate::DbPool;

const PLANETS: &[(&str, i64, &str)] = &[
    ("TauCeti F", 12, "TauCeti"),
    ("Maxwell-1", 4_200, "Sirius"),
    ("Nasan IV", 840, "Vega"),
    ("Gliese 581c", 20, "Gliese 581"),
];

const SCIENTISTS: &[(&str, &str)] = &[
    ("Mel T. Valent", "xenobiology"),
    ("P. Legrange", "orbital mechanics"),
    ("Ada Sagan", "astrophysics"),
];

const MISSIONS: &[(&str, usize, usize)] = &[
    ("Explore Planet X.", 0, 0),
    ("Map the Rings.", 0, 1),
    ("Survey Surface.", 1, 2),
    ("Find Water.", 2, 3),
];

/// Insert a small set of planets, scientists and missions.
///
/// Does nothing if any scientist already exists. Returns the number of
/// missions inserted.
pub async fn seed_demo_data(pool: &DbPool) -> Result<usize, sqlx::Error> {
    if !ScientistRepo::list(pool).await?.is_empty() {
        tracing::info!("Database already populated, skipping demo seed");
        return Ok(0);
    }

    let mut planet_ids = Vec::with_capacity(PLANETS.len());
    for (name, distance, star) in PLANETS {
        let planet = PlanetRepo::create(
            pool,
            &CreatePlanet {
                name: Some((*name).to_string()),
                distance_from_earth: Some(*distance),
                nearest_star: Some((*star).to_string()),
            },
        )
        .await?;
        planet_ids.push(planet.id);
    }

    let mut scientist_ids = Vec::with_capacity(SCIENTISTS.len());
    for (name, field) in SCIENTISTS {
        let scientist = ScientistRepo::create(
            pool,
            &CreateScientist {
                name: Some((*name).to_string()),
                field_of_study: Some((*field).to_string()),
            },
        )
        .await?;
        scientist_ids.push(scientist.id);
    }

    for (name, scientist, planet) in MISSIONS {
        MissionRepo::create(
            pool,
            &CreateMission {
                name: Some((*name).to_string()),
                scientist_id: Some(scientist_ids[*scientist]),
                planet_id: Some(planet_ids[*planet]),
            },
        )
        .await?;
    }

    tracing::info!(
        planets = planet_ids.len(),
        scientists = scientist_ids.len(),
        missions = MISSIONS.len(),
        "Demo data seeded"
    );
    Ok(MISSIONS.len())
}
