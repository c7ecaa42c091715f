mod dashboard;
mod lineup;
mod prediction;
mod squad;
mod transfers;

pub use dashboard::*;
pub use lineup::*;
pub use prediction::*;
pub use squad::*;
pub use transfers::*;
