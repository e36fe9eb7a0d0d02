use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{MiningError, MiningResult};

pub type Timestamp = i64;
pub type BucketIndex = usize;

/// A discretized time-difference category `(low, high]`.
///
/// `high == None` is unbounded. A bucket with `low == high` is a point
/// bucket that only holds `t == low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBucket {
    pub low: Timestamp,
    pub high: Option<Timestamp>,
}

impl TimeBucket {
    pub fn new(low: Timestamp, high: Timestamp) -> Self {
        Self { low, high: Some(high) }
    }

    pub fn unbounded(low: Timestamp) -> Self {
        Self { low, high: None }
    }

    pub fn is_point(&self) -> bool {
        self.high == Some(self.low)
    }

    pub fn contains(&self, t: Timestamp) -> bool {
        match self.high {
            Some(high) if high == self.low => t == self.low,
            Some(high) => t > self.low && t <= high,
            None => t > self.low,
        }
    }

    /// Whether this bucket intersects the window `[low, high)`.
    fn overlaps(&self, low: Timestamp, high: Option<Timestamp>) -> bool {
        if high == Some(low) {
            return self.contains(low);
        }
        let below = matches!(self.high, Some(h) if h <= low);
        let above = matches!(high, Some(h) if self.low >= h);
        !(below || above)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "({}, {}]", self.low, high),
            None => write!(f, "({}, inf)", self.low),
        }
    }
}

/// Maps raw time differences onto an ordered bucket list and precomputes
/// which buckets a sum of two buckets can land in.
#[derive(Debug, Clone)]
pub struct Discretizer {
    buckets: Vec<TimeBucket>,
    // row i holds i + 1 entries, one per j <= i
    table: Vec<Vec<Vec<BucketIndex>>>,
}

impl Discretizer {
    pub fn new(buckets: Vec<TimeBucket>) -> MiningResult<Self> {
        validate_buckets(&buckets)?;
        let table = make_table(&buckets);
        Ok(Self { buckets, table })
    }

    pub fn buckets(&self) -> &[TimeBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, index: BucketIndex) -> MiningResult<&TimeBucket> {
        self.buckets.get(index).ok_or_else(|| {
            MiningError::InvalidBucket(format!(
                "index {} outside {} configured buckets",
                index,
                self.buckets.len()
            ))
        })
    }

    /// Bucket index for the absolute value of `delta`, if any bucket holds it.
    pub fn bucket_of(&self, delta: Timestamp) -> Option<BucketIndex> {
        let delta = delta.saturating_abs();
        self.buckets.iter().position(|bucket| bucket.contains(delta))
    }

    pub fn index_of(&self, bucket: &TimeBucket) -> MiningResult<BucketIndex> {
        self.buckets
            .iter()
            .position(|reference| reference == bucket)
            .ok_or_else(|| MiningError::InvalidBucket(format!("{} is not configured", bucket)))
    }

    /// Lower-triangular compatibility table, addressed `[i][j]` with `i >= j`.
    pub fn compatibility_table(&self) -> &[Vec<Vec<BucketIndex>>] {
        &self.table
    }

    /// Buckets the sum of a span in `a` and a span in `b` may fall into.
    pub fn compatible(&self, a: BucketIndex, b: BucketIndex) -> &[BucketIndex] {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        self.table
            .get(hi)
            .and_then(|row| row.get(lo))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn validate_buckets(buckets: &[TimeBucket]) -> MiningResult<()> {
    if buckets.is_empty() {
        return Err(MiningError::InvalidConfig("bucket list is empty".into()));
    }

    for (idx, bucket) in buckets.iter().enumerate() {
        if let Some(high) = bucket.high {
            if high < bucket.low {
                return Err(MiningError::InvalidConfig(format!("bucket {} has high < low", bucket)));
            }
        } else if idx + 1 != buckets.len() {
            return Err(MiningError::InvalidConfig(format!(
                "only the last bucket may be unbounded, found {} at position {}",
                bucket, idx
            )));
        }
    }

    for pair in buckets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        // ascending and disjoint: the next bucket starts where the previous ends
        let ordered = match prev.high {
            Some(high) if next.is_point() => next.low > high,
            Some(high) => next.low >= high,
            None => false,
        };
        if !ordered {
            return Err(MiningError::InvalidConfig(format!(
                "buckets {} and {} are not ascending and disjoint",
                prev, next
            )));
        }
    }

    Ok(())
}

fn make_table(buckets: &[TimeBucket]) -> Vec<Vec<Vec<BucketIndex>>> {
    (0..buckets.len())
        .map(|i| {
            (0..=i)
                .map(|j| {
                    let low = buckets[i].low.saturating_add(buckets[j].low);
                    let high = match (buckets[i].high, buckets[j].high) {
                        (Some(a), Some(b)) => Some(a.saturating_add(b)),
                        _ => None,
                    };
                    buckets
                        .iter()
                        .enumerate()
                        .filter(|(_, bucket)| bucket.overlaps(low, high))
                        .map(|(idx, _)| idx)
                        .collect()
                })
                .collect()
        })
        .collect()
}
