use crate::PlayerRecord;
use serde::Serialize;

/// Squad summary shown above the position sections. Never stored, always
/// derived from the current active roster.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateStats {
    pub total_players: usize,
    pub mean_rating: f32,
    pub mean_age: f32,
    pub flagged_count: usize,
}

impl AggregateStats {
    pub fn from_players<'p>(players: impl IntoIterator<Item = &'p PlayerRecord>) -> Self {
        let mut total_players = 0usize;
        let mut rating_sum = 0.0f32;
        let mut age_sum = 0u32;
        let mut flagged_count = 0usize;

        for player in players {
            total_players += 1;
            rating_sum += player.rating;
            age_sum += player.age as u32;
            if player.is_flagged {
                flagged_count += 1;
            }
        }

        if total_players == 0 {
            return AggregateStats::default();
        }

        AggregateStats {
            total_players,
            mean_rating: rating_sum / total_players as f32,
            mean_age: age_sum as f32 / total_players as f32,
            flagged_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerPositionGroup;

    fn player(name: &str, rating: f32, age: u8, is_flagged: bool) -> PlayerRecord {
        PlayerRecord::builder()
            .name(name.to_string())
            .position(PlayerPositionGroup::Defender)
            .rating(rating)
            .age(age)
            .club("Man City".to_string())
            .flagged(is_flagged)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_squad_has_zero_means() {
        let stats = AggregateStats::from_players(std::iter::empty());

        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.mean_rating, 0.0);
        assert_eq!(stats.mean_age, 0.0);
        assert_eq!(stats.flagged_count, 0);
    }

    #[test]
    fn test_means_and_flag_count() {
        let players = vec![
            player("Dias", 8.0, 27, false),
            player("Akanji", 7.0, 29, true),
            player("Gvardiol", 9.0, 22, false),
        ];

        let stats = AggregateStats::from_players(&players);

        assert_eq!(stats.total_players, 3);
        assert!((stats.mean_rating - 8.0).abs() < 1e-5);
        assert!((stats.mean_age - 26.0).abs() < 1e-5);
        assert_eq!(stats.flagged_count, 1);
    }
}
