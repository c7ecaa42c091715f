use serde::Deserialize;

const STATIC_SQUAD_JSON: &str = include_str!("../../data/squad.json");

#[derive(Deserialize)]
pub struct SquadEntity {
    pub squad: Vec<SquadPlayerEntity>,
    pub suggested: Vec<SquadPlayerEntity>,
}

#[derive(Deserialize)]
pub struct SquadPlayerEntity {
    pub name: String,
    pub position: String,
    pub display_position: String,
    pub rating: f32,
    pub age: u8,
    pub shirt_number: u8,
    pub club: String,
}

pub struct SquadLoader;

impl SquadLoader {
    pub fn load() -> serde_json::Result<SquadEntity> {
        serde_json::from_str(STATIC_SQUAD_JSON)
    }
}
