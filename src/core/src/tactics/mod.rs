mod formation;
mod lineup;

pub use formation::*;
pub use lineup::*;
