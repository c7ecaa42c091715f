use crate::loaders::SquadPlayerEntity;
use crate::DatabaseError;
use squad_core::transfers::TransferTarget;
use squad_core::{PlayerPositionGroup, PlayerRecord};
use std::str::FromStr;

pub struct PlayerGenerator;

impl PlayerGenerator {
    pub fn generate(entity: &SquadPlayerEntity, is_candidate: bool) -> Result<PlayerRecord, DatabaseError> {
        PlayerRecord::builder()
            .name(entity.name.clone())
            .position(Self::position(&entity.position)?)
            .display_position(entity.display_position.clone())
            .rating(entity.rating)
            .age(entity.age)
            .shirt_number(entity.shirt_number)
            .club(entity.club.clone())
            .candidate(is_candidate)
            .build()
            .map_err(|reason| DatabaseError::InvalidSeed {
                entity: entity.name.clone(),
                reason,
            })
    }

    pub fn generate_target(entity: &SquadPlayerEntity) -> Result<TransferTarget, DatabaseError> {
        Ok(TransferTarget {
            name: entity.name.clone(),
            position: Self::position(&entity.position)?,
            display_position: entity.display_position.clone(),
            rating: entity.rating,
            age: entity.age,
            shirt_number: entity.shirt_number,
            club: entity.club.clone(),
        })
    }

    pub fn position(value: &str) -> Result<PlayerPositionGroup, DatabaseError> {
        PlayerPositionGroup::from_str(value).map_err(|reason| DatabaseError::InvalidSeed {
            entity: value.to_string(),
            reason,
        })
    }
}
