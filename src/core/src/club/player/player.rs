use crate::club::player::builder::PlayerRecordBuilder;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionGroup {
    /// Section order used by every grouped view
    pub fn all() -> [PlayerPositionGroup; 4] {
        [
            PlayerPositionGroup::Goalkeeper,
            PlayerPositionGroup::Defender,
            PlayerPositionGroup::Midfielder,
            PlayerPositionGroup::Forward,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerPositionGroup::Goalkeeper => "Goalkeeper",
            PlayerPositionGroup::Defender => "Defender",
            PlayerPositionGroup::Midfielder => "Midfielder",
            PlayerPositionGroup::Forward => "Forward",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            PlayerPositionGroup::Goalkeeper => "Goalkeepers",
            PlayerPositionGroup::Defender => "Defenders",
            PlayerPositionGroup::Midfielder => "Midfielders",
            PlayerPositionGroup::Forward => "Forwards",
        }
    }
}

impl FromStr for PlayerPositionGroup {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "goalkeeper" => Ok(PlayerPositionGroup::Goalkeeper),
            "defender" => Ok(PlayerPositionGroup::Defender),
            "midfielder" => Ok(PlayerPositionGroup::Midfielder),
            "forward" => Ok(PlayerPositionGroup::Forward),
            _ => Err(format!("unknown position group: {}", value)),
        }
    }
}

impl Display for PlayerPositionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub position: PlayerPositionGroup,
    pub display_position: String,
    pub rating: f32,
    pub age: u8,
    pub shirt_number: u8,
    pub club: String,

    //roster membership
    pub is_candidate: bool,
    pub is_flagged: bool,
}

impl PlayerRecord {
    pub fn builder() -> PlayerRecordBuilder {
        PlayerRecordBuilder::new()
    }

    pub fn is_active(&self) -> bool {
        !self.is_candidate
    }

    /// Last word of the name, "Kevin De Bruyne" -> "Bruyne"
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

impl Display for PlayerRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} #{} ({}, {:.1})",
            self.name, self.shirt_number, self.display_position, self.rating
        )
    }
}
