pub mod containment;
pub mod join;
pub mod mining;
pub mod prune;
pub mod support;

pub use containment::contains;
pub use join::{is_joinable, join};
pub use mining::{mine, Miner};
pub use prune::{has_frequent_subsequences, prune};
pub use support::{min_count, one_item_count, one_item_support, support, support_count};
