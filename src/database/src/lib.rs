mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use squad_core::prediction::PredictionError;
use squad_core::tactics::LineupError;
use squad_core::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed {entity}: {reason}")]
    InvalidSeed { entity: String, reason: String },

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Lineup(#[from] LineupError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

pub struct DatabaseEntity {
    pub squad: SquadEntity,
    pub transfers: TransfersEntity,
    pub lineup: LineupEntity,
    pub prediction: PredictionEntity,
    pub dashboard: DashboardEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            squad: SquadLoader::load()?,
            transfers: TransfersLoader::load()?,
            lineup: LineupLoader::load()?,
            prediction: PredictionLoader::load()?,
            dashboard: DashboardLoader::load()?,
        })
    }
}
