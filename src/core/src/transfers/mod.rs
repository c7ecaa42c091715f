mod market;
mod query;

pub use market::*;
pub use query::*;
