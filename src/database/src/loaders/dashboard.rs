use chrono::NaiveDateTime;
use serde::Deserialize;
use squad_core::{FormResult, Venue};

const STATIC_DASHBOARD_JSON: &str = include_str!("../../data/dashboard.json");

#[derive(Deserialize)]
pub struct DashboardEntity {
    pub team_name: String,
    pub season: SeasonEntity,
    pub recent_form: Vec<FormResult>,
    pub fixtures: Vec<FixtureEntity>,
}

#[derive(Deserialize)]
pub struct SeasonEntity {
    pub league_position: u8,
    pub league: String,
    pub points: u16,
    pub matches_played: u16,
    pub goals_scored: u16,
    pub clean_sheets: u16,
}

#[derive(Deserialize)]
pub struct FixtureEntity {
    pub opponent: String,
    pub kickoff: NaiveDateTime,
    pub venue: Venue,
    pub competition: String,
}

pub struct DashboardLoader;

impl DashboardLoader {
    pub fn load() -> serde_json::Result<DashboardEntity> {
        serde_json::from_str(STATIC_DASHBOARD_JSON)
    }
}
