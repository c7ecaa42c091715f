use crate::transfers::query::{MarketQuery, MarketSort};
use crate::PlayerPositionGroup;
use itertools::Itertools;
use log::debug;
use serde::Serialize;
use thiserror::Error;

const BASE_WIN_PROBABILITY: f32 = 72.5;
const MAX_WIN_PROBABILITY: f32 = 98.0;
const RATING_BOOST_BASELINE: f32 = 7.0;
const RATING_BOOST_FACTOR: f32 = 2.0;

const BASE_SQUAD_STRENGTH: f32 = 7.91;
const STARTING_ELEVEN: f32 = 11.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("Player {0} is not on the market")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferTarget {
    pub name: String,
    pub position: PlayerPositionGroup,
    pub display_position: String,
    pub rating: f32,
    pub age: u8,
    pub shirt_number: u8,
    pub club: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransfer {
    pub player_name: String,
    pub from_club: String,
    pub to_club: String,
    pub fee: String,
    pub date: String,
    pub position: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransferMarket {
    targets: Vec<TransferTarget>,
    shortlist: Vec<String>,
    recent: Vec<RecentTransfer>,
}

impl TransferMarket {
    pub fn new(targets: Vec<TransferTarget>, recent: Vec<RecentTransfer>) -> Self {
        TransferMarket {
            targets,
            shortlist: Vec::new(),
            recent,
        }
    }

    pub fn targets(&self) -> &[TransferTarget] {
        &self.targets
    }

    pub fn recent_transfers(&self) -> &[RecentTransfer] {
        &self.recent
    }

    pub fn available_clubs(&self) -> Vec<&str> {
        self.targets
            .iter()
            .map(|t| t.club.as_str())
            .unique()
            .sorted()
            .collect()
    }

    pub fn search(&self, query: &MarketQuery) -> Vec<&TransferTarget> {
        self.targets
            .iter()
            .filter(|t| query.matches_search(&t.name, &t.club))
            .filter(|t| query.position.is_none_or(|position| t.position == position))
            .filter(|t| query.club.as_deref().is_none_or(|club| t.club == club))
            .sorted_by(|a, b| match query.sort {
                MarketSort::Rating => b.rating.total_cmp(&a.rating),
                MarketSort::Age => a.age.cmp(&b.age),
                MarketSort::Name => a.name.cmp(&b.name),
            })
            .collect()
    }

    // ─── Shortlist ───────────────────────────────────────────────────

    /// Returns whether the player is shortlisted after the toggle
    pub fn toggle_shortlist(&mut self, name: &str) -> Result<bool, MarketError> {
        if !self.targets.iter().any(|t| t.name == name) {
            return Err(MarketError::NotFound(name.to_string()));
        }

        let shortlisted = if self.is_shortlisted(name) {
            self.shortlist.retain(|n| n != name);
            false
        } else {
            self.shortlist.push(name.to_string());
            true
        };

        debug!("market: {} shortlisted = {}", name, shortlisted);

        Ok(shortlisted)
    }

    pub fn is_shortlisted(&self, name: &str) -> bool {
        self.shortlist.iter().any(|n| n == name)
    }

    pub fn shortlist(&self) -> Vec<&TransferTarget> {
        self.shortlist
            .iter()
            .filter_map(|name| self.targets.iter().find(|t| &t.name == name))
            .collect()
    }

    /// Percent chance to win the next fixture with the shortlist signed
    pub fn win_probability(&self) -> f32 {
        let shortlist = self.shortlist();
        if shortlist.is_empty() {
            return BASE_WIN_PROBABILITY;
        }

        let boost: f32 = shortlist
            .iter()
            .map(|t| (t.rating - RATING_BOOST_BASELINE) * RATING_BOOST_FACTOR)
            .sum();

        (BASE_WIN_PROBABILITY + boost).min(MAX_WIN_PROBABILITY)
    }

    /// Starting eleven average blended with the shortlist average
    pub fn squad_strength(&self) -> f32 {
        let shortlist = self.shortlist();
        if shortlist.is_empty() {
            return BASE_SQUAD_STRENGTH;
        }

        let count = shortlist.len() as f32;
        let average = shortlist.iter().map(|t| t.rating).sum::<f32>() / count;

        (BASE_SQUAD_STRENGTH * STARTING_ELEVEN + average * count) / (STARTING_ELEVEN + count)
    }
}
