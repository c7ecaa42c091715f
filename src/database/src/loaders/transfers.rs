use crate::loaders::SquadPlayerEntity;
use serde::Deserialize;

const STATIC_TRANSFERS_JSON: &str = include_str!("../../data/transfers.json");

#[derive(Deserialize)]
pub struct TransfersEntity {
    pub market: Vec<SquadPlayerEntity>,
    pub recent: Vec<RecentTransferEntity>,
}

#[derive(Deserialize)]
pub struct RecentTransferEntity {
    pub player_name: String,
    pub from_club: String,
    pub to_club: String,
    pub fee: String,
    pub date: String,
    pub position: String,
}

pub struct TransfersLoader;

impl TransfersLoader {
    pub fn load() -> serde_json::Result<TransfersEntity> {
        serde_json::from_str(STATIC_TRANSFERS_JSON)
    }
}
