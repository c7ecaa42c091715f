use crate::PlayerPositionGroup;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MarketSort {
    #[default]
    Rating,
    Age,
    Name,
}

impl MarketSort {
    pub fn label(&self) -> &'static str {
        match self {
            MarketSort::Rating => "Rating",
            MarketSort::Age => "Age",
            MarketSort::Name => "Name",
        }
    }
}

/// Search box, position/club pickers and sort picker of the market screen.
/// `None` means "All".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MarketQuery {
    pub search: String,
    pub position: Option<PlayerPositionGroup>,
    pub club: Option<String>,
    pub sort: MarketSort,
}

impl MarketQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn position(mut self, position: PlayerPositionGroup) -> Self {
        self.position = Some(position);
        self
    }

    pub fn club(mut self, club: &str) -> Self {
        self.club = Some(club.to_string());
        self
    }

    pub fn sort(mut self, sort: MarketSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.position.is_some()
            || self.club.is_some()
            || self.sort != MarketSort::Rating
    }

    pub fn clear(&mut self) {
        *self = MarketQuery::default();
    }

    /// Case-insensitive match against name or club
    pub(crate) fn matches_search(&self, name: &str, club: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let query = self.search.to_lowercase();
        name.to_lowercase().contains(&query) || club.to_lowercase().contains(&query)
    }
}
