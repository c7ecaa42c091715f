use crate::club::squad::{RosterState, SquadFilter};
use crate::prediction::KICKOFF_FORMAT;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStats {
    pub league_position: u8,
    pub league: String,
    pub points: u16,
    pub matches_played: u16,
    pub goals_scored: u16,
    pub clean_sheets: u16,
}

impl SeasonStats {
    pub fn goals_per_match(&self) -> f32 {
        if self.matches_played == 0 {
            return 0.0;
        }
        self.goals_scored as f32 / self.matches_played as f32
    }

    pub fn clean_sheet_percent(&self) -> f32 {
        if self.matches_played == 0 {
            return 0.0;
        }
        self.clean_sheets as f32 * 100.0 / self.matches_played as f32
    }

    /// 1 -> "1st", 22 -> "22nd"
    pub fn league_position_label(&self) -> String {
        let n = self.league_position;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{}{}", n, suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    pub fn points(&self) -> u16 {
        match self {
            FormResult::Win => 3,
            FormResult::Draw => 1,
            FormResult::Loss => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub opponent: String,
    pub kickoff: NaiveDateTime,
    pub venue: Venue,
    pub competition: String,
}

impl Fixture {
    pub fn kickoff_label(&self) -> String {
        self.kickoff.format(KICKOFF_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub name: String,
    pub position: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDashboard {
    pub team_name: String,
    pub season: SeasonStats,
    pub recent_form: Vec<FormResult>,
    pub fixtures: Vec<Fixture>,
}

impl TeamDashboard {
    pub fn form_points(&self) -> u16 {
        self.recent_form.iter().map(FormResult::points).sum()
    }

    pub fn form_summary(&self) -> String {
        format!(
            "{} pts from last {}",
            self.form_points(),
            self.recent_form.len()
        )
    }

    pub fn next_fixture(&self) -> Option<&Fixture> {
        self.fixtures.iter().min_by_key(|f| f.kickoff)
    }

    /// Highest rated squad players, surname only
    pub fn top_performers(roster: &RosterState, count: usize) -> Vec<TopPerformer> {
        roster
            .sorted_view(SquadFilter::ByRating)
            .into_iter()
            .take(count)
            .map(|p| TopPerformer {
                name: p.short_name().to_string(),
                position: p.display_position.clone(),
                rating: p.rating,
            })
            .collect()
    }
}
