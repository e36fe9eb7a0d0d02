pub mod apriori;
pub mod config;
pub mod error;
pub mod interval;
pub mod sequence;
pub mod utils;


pub use apriori::{contains, join, mine, prune, support, Miner};
pub use config::{default_buckets, sample_database, MiningConfig};
pub use error::{MiningError, MiningResult};
pub use interval::{BucketIndex, Discretizer, TimeBucket, Timestamp};
pub use sequence::{Database, Event, Item, Pattern, TimingMatrix, Transaction};
pub use utils::{FrequentLevel, FrequentSequenceTable};
