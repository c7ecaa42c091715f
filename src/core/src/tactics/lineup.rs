use crate::tactics::formation::{Formation, FormationSlot};
use crate::PlayerPositionGroup;
use log::debug;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_FORMATION: &str = "4-3-3";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error("Unknown formation {0}")]
    UnknownFormation(String),

    #[error("Formation {formation} points at player #{index}, only {starters} starters")]
    SlotOutOfRange {
        formation: String,
        index: usize,
        starters: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupPlayer {
    pub name: String,
    pub rating: f32,
    pub position: PlayerPositionGroup,
    pub is_star_player: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement<'l> {
    pub player: &'l LineupPlayer,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct TacticalLineup {
    starters: Vec<LineupPlayer>,
    formations: Vec<Formation>,
    selected: usize,
}

impl TacticalLineup {
    /// Starts on the default formation when present, otherwise the first one
    pub fn new(starters: Vec<LineupPlayer>, formations: Vec<Formation>) -> Result<Self, LineupError> {
        if formations.is_empty() {
            return Err(LineupError::UnknownFormation(DEFAULT_FORMATION.to_string()));
        }

        for formation in &formations {
            Self::validate(formation, starters.len())?;
        }

        let selected = formations
            .iter()
            .position(|f| f.name == DEFAULT_FORMATION)
            .unwrap_or(0);

        Ok(TacticalLineup {
            starters,
            formations,
            selected,
        })
    }

    pub fn starters(&self) -> &[LineupPlayer] {
        &self.starters
    }

    pub fn formation(&self) -> &Formation {
        &self.formations[self.selected]
    }

    pub fn formation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formations.iter().map(|f| f.name.as_str()).collect();
        names.sort();
        names
    }

    pub fn select_formation(&mut self, name: &str) -> Result<&Formation, LineupError> {
        let idx = self
            .formations
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| LineupError::UnknownFormation(name.to_string()))?;

        debug!("lineup: formation {} selected", name);

        self.selected = idx;
        Ok(&self.formations[idx])
    }

    pub fn placements(&self) -> Vec<Placement<'_>> {
        self.formation()
            .slots
            .iter()
            .map(|slot| Placement {
                player: &self.starters[slot.player_index],
                x: slot.x,
                y: slot.y,
            })
            .collect()
    }

    pub fn average_rating(&self) -> f32 {
        if self.starters.is_empty() {
            return 0.0;
        }

        self.starters.iter().map(|p| p.rating).sum::<f32>() / self.starters.len() as f32
    }

    pub fn star_players(&self) -> Vec<&LineupPlayer> {
        self.starters.iter().filter(|p| p.is_star_player).collect()
    }

    /// Outfield lines of the selected formation, "4-3-3"
    pub fn formation_description(&self) -> String {
        let count = |group: PlayerPositionGroup| {
            self.placements()
                .iter()
                .filter(|p| p.player.position == group)
                .count()
        };

        format!(
            "{}-{}-{}",
            count(PlayerPositionGroup::Defender),
            count(PlayerPositionGroup::Midfielder),
            count(PlayerPositionGroup::Forward)
        )
    }

    fn validate(formation: &Formation, starters: usize) -> Result<(), LineupError> {
        match formation
            .slots
            .iter()
            .find(|slot: &&FormationSlot| slot.player_index >= starters)
        {
            Some(slot) => Err(LineupError::SlotOutOfRange {
                formation: formation.name.clone(),
                index: slot.player_index,
                starters,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerPositionGroup::*;

    fn starter(name: &str, rating: f32, position: PlayerPositionGroup) -> LineupPlayer {
        LineupPlayer {
            name: name.to_string(),
            rating,
            position,
            is_star_player: rating >= 9.0,
        }
    }

    fn slot(player_index: usize) -> FormationSlot {
        FormationSlot {
            player_index,
            x: 0.5,
            y: 0.5,
        }
    }

    fn starters() -> Vec<LineupPlayer> {
        vec![
            starter("Ederson", 8.4, Goalkeeper),
            starter("Gvardiol", 7.8, Defender),
            starter("Dias", 8.1, Defender),
            starter("Akanji", 7.5, Defender),
            starter("Walker", 7.6, Defender),
            starter("Kovacic", 7.9, Midfielder),
            starter("Rodri", 9.1, Midfielder),
            starter("Bernardo", 8.3, Midfielder),
            starter("Doku", 7.7, Forward),
            starter("Haaland", 9.4, Forward),
            starter("Foden", 8.8, Forward),
        ]
    }

    fn formations() -> Vec<Formation> {
        vec![
            Formation::new(
                "4-4-2",
                "4-4-2 Classic",
                [9, 10, 8, 5, 6, 7, 1, 2, 3, 4, 0].into_iter().map(slot).collect(),
            ),
            Formation::new(
                "4-3-3",
                "4-3-3 Attack",
                [8, 9, 10, 5, 6, 7, 1, 2, 3, 4, 0].into_iter().map(slot).collect(),
            ),
        ]
    }

    #[test]
    fn test_starts_on_default_formation() {
        let lineup = TacticalLineup::new(starters(), formations()).unwrap();

        assert_eq!(lineup.formation().name, "4-3-3");
        assert_eq!(lineup.formation_description(), "4-3-3");
        assert_eq!(lineup.formation_names(), vec!["4-3-3", "4-4-2"]);
    }

    #[test]
    fn test_select_formation() {
        let mut lineup = TacticalLineup::new(starters(), formations()).unwrap();

        assert_eq!(lineup.select_formation("4-4-2").unwrap().display_name, "4-4-2 Classic");
        assert_eq!(lineup.placements()[0].player.name, "Haaland");
        assert_eq!(
            lineup.select_formation("3-5-2").unwrap_err(),
            LineupError::UnknownFormation("3-5-2".to_string())
        );
        assert_eq!(lineup.formation().name, "4-4-2");
    }

    #[test]
    fn test_slot_out_of_range_rejected() {
        let broken = vec![Formation::new("4-3-3", "Broken", vec![slot(11)])];

        assert_eq!(
            TacticalLineup::new(starters(), broken).unwrap_err(),
            LineupError::SlotOutOfRange {
                formation: "4-3-3".to_string(),
                index: 11,
                starters: 11
            }
        );
    }

    #[test]
    fn test_star_players_and_average() {
        let lineup = TacticalLineup::new(starters(), formations()).unwrap();

        let stars: Vec<&str> = lineup.star_players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(stars, vec!["Rodri", "Haaland"]);
        assert!((lineup.average_rating() - 8.236364).abs() < 1e-3);
    }
}
