pub mod player;
pub mod squad;

pub use player::*;
pub use squad::*;
