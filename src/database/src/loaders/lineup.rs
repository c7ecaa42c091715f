use serde::Deserialize;

const STATIC_LINEUP_JSON: &str = include_str!("../../data/lineup.json");

#[derive(Deserialize)]
pub struct LineupEntity {
    pub starters: Vec<StarterEntity>,
    pub formations: Vec<FormationEntity>,
}

#[derive(Deserialize)]
pub struct StarterEntity {
    pub name: String,
    pub rating: f32,
    pub position: String,
    #[serde(default)]
    pub is_star_player: bool,
}

#[derive(Deserialize)]
pub struct FormationEntity {
    pub name: String,
    pub display_name: String,
    pub slots: Vec<FormationSlotEntity>,
}

#[derive(Deserialize)]
pub struct FormationSlotEntity {
    pub player_index: usize,
    pub x: f32,
    pub y: f32,
}

pub struct LineupLoader;

impl LineupLoader {
    pub fn load() -> serde_json::Result<LineupEntity> {
        serde_json::from_str(STATIC_LINEUP_JSON)
    }
}
