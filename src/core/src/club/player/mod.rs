pub mod builder;
mod player;

pub use builder::PlayerRecordBuilder;
pub use player::*;
