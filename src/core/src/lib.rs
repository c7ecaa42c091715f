pub mod club;
pub mod dashboard;
pub mod game;
pub mod notification;
pub mod prediction;
pub mod tactics;
pub mod transfers;

pub mod utils;

pub use club::*;
pub use dashboard::*;
pub use game::*;
pub use notification::*;
pub use utils::*;
