pub mod pattern;
pub mod transaction;

pub use pattern::{Pattern, TimingMatrix};
pub use transaction::{Database, Event, Item, Transaction};
