//! Type-safe wrappers and enums for NFL stat data.

pub mod position;
pub mod stat;
pub mod time;

pub use position::Position;
pub use stat::{PrimaryStat, StatCategory};
pub use time::Week;
