mod error;
mod gesture;
mod roster;
mod stats;
mod view;

pub use error::{Membership, RosterError};
pub use gesture::{DropTarget, SquadGesture};
pub use roster::{PositionGroups, RosterState};
pub use stats::AggregateStats;
pub use view::SquadFilter;
