use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{MiningError, MiningResult};
use super::interval::TimeBucket;
use super::sequence::{Database, Transaction};

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Fraction of transactions a pattern must occur in, in `(0, 1]`.
    pub min_support: f64,
    /// Longest pattern length to search for.
    pub max_length: usize,
    /// Ascending, disjoint buckets; only the last may be unbounded.
    pub buckets: Vec<TimeBucket>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.5,
            max_length: 4,
            buckets: default_buckets(),
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, max_length: usize, buckets: Vec<TimeBucket>) -> Self {
        Self { min_support, max_length, buckets }
    }

    pub fn from_json_str(json: &str) -> MiningResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> MiningResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_buckets(mut self, buckets: Vec<TimeBucket>) -> Self {
        self.buckets = buckets;
        self
    }

    /// Range checks on the scalar parameters. Bucket layout is checked when
    /// the discretizer is built.
    pub fn validate(&self) -> MiningResult<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::InvalidConfig(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        if self.max_length == 0 {
            return Err(MiningError::InvalidConfig("max_length must be at least 1".into()));
        }
        if self.buckets.is_empty() {
            return Err(MiningError::InvalidConfig("bucket list is empty".into()));
        }
        Ok(())
    }
}

/// `(0,0]`, `(0,3]`, `(3,6]`, `(6,inf)`.
pub fn default_buckets() -> Vec<TimeBucket> {
    vec![
        TimeBucket::new(0, 0),
        TimeBucket::new(0, 3),
        TimeBucket::new(3, 6),
        TimeBucket::unbounded(6),
    ]
}

/// Four reference transactions used for demos and golden tests.
pub fn sample_database() -> MiningResult<Database> {
    let rows: [&[(&str, i64)]; 4] = [
        &[("a", 1), ("b", 3), ("c", 3), ("a", 5), ("e", 5), ("c", 10)],
        &[("d", 5), ("a", 7), ("b", 7), ("e", 7), ("d", 8), ("e", 8), ("c", 14), ("d", 15)],
        &[("a", 8), ("b", 8), ("e", 11), ("d", 12), ("b", 13), ("c", 13), ("c", 16)],
        &[("b", 15), ("f", 15), ("e", 16), ("b", 17), ("c", 17)],
    ];

    rows.iter()
        .map(|row| Transaction::new(row.iter().copied()))
        .collect::<MiningResult<Vec<_>>>()
        .map(Database::new)
}
