use chrono::NaiveDateTime;
use serde::Deserialize;

const STATIC_PREDICTION_JSON: &str = include_str!("../../data/prediction.json");

#[derive(Deserialize)]
pub struct PredictionEntity {
    pub home_team: String,
    pub away_team: String,
    pub kickoff: NaiveDateTime,
    pub venue: String,
    pub confidence_level: String,
    pub model_version: String,
    pub win_probability: WinProbabilityEntity,
    pub predicted_stats: PredictedStatsEntity,
    pub tactical_insight: TacticalInsightEntity,
}

#[derive(Deserialize)]
pub struct WinProbabilityEntity {
    pub home_win: f32,
    pub draw: f32,
    pub away_win: f32,
}

#[derive(Deserialize)]
pub struct PredictedStatsEntity {
    pub expected_goals: StatComparisonEntity,
    pub possession: StatComparisonEntity,
    pub shots_on_target: StatComparisonEntity,
    pub pass_completion: StatComparisonEntity,
    pub ppda: StatComparisonEntity,
}

#[derive(Deserialize)]
pub struct StatComparisonEntity {
    pub metric: String,
    pub home_value: f32,
    pub away_value: f32,
}

#[derive(Deserialize)]
pub struct TacticalInsightEntity {
    pub title: String,
    pub description: String,
}

pub struct PredictionLoader;

impl PredictionLoader {
    pub fn load() -> serde_json::Result<PredictionEntity> {
        serde_json::from_str(STATIC_PREDICTION_JSON)
    }
}
