use crate::club::squad::error::RosterError;
use crate::club::squad::roster::RosterState;
use crate::PlayerPositionGroup;
use log::debug;
use std::fmt::{Display, Formatter, Result};

/// Where a dragged (or long-pressed then tapped) player was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Position(PlayerPositionGroup),
    Candidates,
}

impl Display for DropTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DropTarget::Position(group) => write!(f, "{}", group.section_title()),
            DropTarget::Candidates => write!(f, "Suggested Players"),
        }
    }
}

/// One user gesture on the squad screen
#[derive(Debug, Clone, PartialEq)]
pub enum SquadGesture {
    Drop { player: String, target: DropTarget },
    ToggleTransferListed { player: String },
}

impl SquadGesture {
    pub fn drop_on(player: &str, target: DropTarget) -> Self {
        SquadGesture::Drop {
            player: player.to_string(),
            target,
        }
    }

    pub fn toggle(player: &str) -> Self {
        SquadGesture::ToggleTransferListed {
            player: player.to_string(),
        }
    }

    pub fn apply(&self, roster: &mut RosterState) -> std::result::Result<(), RosterError> {
        match self {
            SquadGesture::Drop { player, target } => {
                roster.drop_player(player, *target)?;
            }
            SquadGesture::ToggleTransferListed { player } => {
                roster.toggle_flag(player)?;
            }
        }
        Ok(())
    }
}

impl RosterState {
    /// Routes a completed drop to the matching move
    pub fn drop_player(
        &mut self,
        name: &str,
        target: DropTarget,
    ) -> std::result::Result<(), RosterError> {
        debug!("squad: drop {} on {}", name, target);

        match target {
            DropTarget::Position(group) => self.move_to_active(name, group).map(|_| ()),
            DropTarget::Candidates => self.move_to_candidate(name).map(|_| ()),
        }
    }
}
