use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

const PROBABILITY_TOLERANCE: f32 = 0.001;
pub const KICKOFF_FORMAT: &str = "%b %-d, %H:%M";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Win probabilities {home_win}/{draw}/{away_win} do not form a distribution")]
    InvalidProbabilities { home_win: f32, draw: f32, away_win: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinProbability {
    pub home_win: f32,
    pub draw: f32,
    pub away_win: f32,
}

impl WinProbability {
    pub fn validate(&self) -> Result<(), PredictionError> {
        let values = [self.home_win, self.draw, self.away_win];
        let in_range = values.iter().all(|v| (0.0..=1.0).contains(v));
        let sum: f32 = values.iter().sum();

        if in_range && (sum - 1.0).abs() <= PROBABILITY_TOLERANCE {
            Ok(())
        } else {
            Err(PredictionError::InvalidProbabilities {
                home_win: self.home_win,
                draw: self.draw,
                away_win: self.away_win,
            })
        }
    }

    /// Ties go to the home side, then the draw
    pub fn favourite(&self) -> MatchOutcome {
        if self.home_win >= self.draw && self.home_win >= self.away_win {
            MatchOutcome::HomeWin
        } else if self.draw >= self.away_win {
            MatchOutcome::Draw
        } else {
            MatchOutcome::AwayWin
        }
    }

    /// Whole percents as shown on the probability bar
    pub fn percents(&self) -> (u8, u8, u8) {
        let percent = |v: f32| (v * 100.0).round() as u8;
        (percent(self.home_win), percent(self.draw), percent(self.away_win))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub metric: String,
    pub home_value: f32,
    pub away_value: f32,
}

impl StatComparison {
    pub fn new(metric: &str, home_value: f32, away_value: f32) -> Self {
        StatComparison {
            metric: metric.to_string(),
            home_value,
            away_value,
        }
    }

    /// 10..=100 reads as a percentage, below 10 with two decimals,
    /// anything larger prints as is
    pub fn format_value(value: f32) -> String {
        if (10.0..=100.0).contains(&value) {
            format!("{}%", value.round() as i64)
        } else if value < 10.0 {
            format!("{:.2}", value)
        } else {
            format!("{}", value)
        }
    }

    /// Home share of the comparison bar, 0.5 when both sides are zero
    pub fn home_share(&self) -> f32 {
        let total = self.home_value + self.away_value;
        if total <= 0.0 {
            0.5
        } else {
            self.home_value / total
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictedStats {
    pub expected_goals: StatComparison,
    pub possession: StatComparison,
    pub shots_on_target: StatComparison,
    pub pass_completion: StatComparison,
    pub ppda: StatComparison,
}

impl PredictedStats {
    pub fn rows(&self) -> [&StatComparison; 5] {
        [
            &self.expected_goals,
            &self.possession,
            &self.shots_on_target,
            &self.pass_completion,
            &self.ppda,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticalInsight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPrediction {
    pub home_team: String,
    pub away_team: String,
    pub kickoff: NaiveDateTime,
    pub venue: String,
    pub confidence_level: String,
    pub win_probability: WinProbability,
    pub predicted_stats: PredictedStats,
    pub tactical_insight: TacticalInsight,
    pub model_version: String,
}

impl MatchPrediction {
    pub fn validate(&self) -> Result<(), PredictionError> {
        self.win_probability.validate()
    }

    pub fn kickoff_label(&self) -> String {
        self.kickoff.format(KICKOFF_FORMAT).to_string()
    }

    pub fn favourite_team(&self) -> Option<&str> {
        match self.win_probability.favourite() {
            MatchOutcome::HomeWin => Some(self.home_team.as_str()),
            MatchOutcome::AwayWin => Some(self.away_team.as_str()),
            MatchOutcome::Draw => None,
        }
    }
}
