use crate::PlayerRecord;
use itertools::Itertools;
use serde::Serialize;

/// Filter chips of the squad screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SquadFilter {
    #[default]
    All,
    ByRating,
    ByAge,
    FlaggedOnly,
}

impl SquadFilter {
    pub fn all() -> [SquadFilter; 4] {
        [
            SquadFilter::All,
            SquadFilter::ByRating,
            SquadFilter::ByAge,
            SquadFilter::FlaggedOnly,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SquadFilter::All => "All Players",
            SquadFilter::ByRating => "Sort by Rating",
            SquadFilter::ByAge => "Sort by Age",
            SquadFilter::FlaggedOnly => "Transfer Listed",
        }
    }

    /// Sorts are stable, equal keys keep their roster order.
    pub fn apply<'p>(&self, players: impl IntoIterator<Item = &'p PlayerRecord>) -> Vec<&'p PlayerRecord> {
        let players = players.into_iter();

        match self {
            SquadFilter::All => players.collect(),
            SquadFilter::ByRating => players
                .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
                .collect(),
            SquadFilter::ByAge => players.sorted_by_key(|p| p.age).collect(),
            SquadFilter::FlaggedOnly => players.filter(|p| p.is_flagged).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerPositionGroup;

    fn player(name: &str, rating: f32) -> PlayerRecord {
        PlayerRecord::builder()
            .name(name.to_string())
            .position(PlayerPositionGroup::Midfielder)
            .rating(rating)
            .age(25)
            .club("Man City".to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn test_rating_sort_with_nan_rating() {
        let players = vec![player("Low", 7.0), player("Unknown", f32::NAN), player("High", 9.0)];

        let names: Vec<&str> = SquadFilter::ByRating
            .apply(&players)
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["Unknown", "High", "Low"]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = SquadFilter::all().iter().map(|f| f.label()).collect();

        assert_eq!(
            labels,
            vec!["All Players", "Sort by Rating", "Sort by Age", "Transfer Listed"]
        );
    }
}
