use serde::Serialize;
use std::fmt;

use super::super::error::{MiningError, MiningResult};
use super::super::interval::{BucketIndex, Discretizer};
use super::transaction::Item;

fn triangular(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

fn offset(i: usize, j: usize) -> usize {
    triangular(i) + j
}

/// Pairwise interval buckets of a k-pattern.
///
/// Entry `(i, j)` with `j < i` constrains the span from item `j` to the later
/// item `i`. Stored flat, row by row: row `i` holds `i` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TimingMatrix {
    len: usize,
    entries: Vec<BucketIndex>,
}

impl TimingMatrix {
    pub fn new(len: usize, entries: Vec<BucketIndex>) -> MiningResult<Self> {
        if entries.len() != triangular(len) {
            return Err(MiningError::MalformedPattern(format!(
                "{} items need {} timing entries, got {}",
                len,
                triangular(len),
                entries.len()
            )));
        }
        Ok(Self { len, entries })
    }

    /// Builds a matrix from rows `1..len`, row `i` holding `i` entries.
    pub fn from_rows(len: usize, rows: Vec<Vec<BucketIndex>>) -> MiningResult<Self> {
        if rows.len() != len.saturating_sub(1) {
            return Err(MiningError::MalformedPattern(format!(
                "{} items need {} timing rows, got {}",
                len,
                len.saturating_sub(1),
                rows.len()
            )));
        }

        let mut entries = Vec::with_capacity(triangular(len));
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != idx + 1 {
                return Err(MiningError::MalformedPattern(format!(
                    "timing row {} must hold {} entries, got {}",
                    idx + 1,
                    idx + 1,
                    row.len()
                )));
            }
            entries.extend(row);
        }
        Ok(Self { len, entries })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn entries(&self) -> &[BucketIndex] {
        &self.entries
    }

    pub fn get(&self, i: usize, j: usize) -> Option<BucketIndex> {
        if j < i && i < self.len {
            Some(self.entries[offset(i, j)])
        } else {
            None
        }
    }

    /// Buckets from every earlier item to item `i`, earliest first.
    pub fn row(&self, i: usize) -> &[BucketIndex] {
        if i == 0 || i >= self.len {
            return &[];
        }
        let start = offset(i, 0);
        &self.entries[start..start + i]
    }

    /// Whether every row is non-increasing as the earlier item moves closer.
    pub fn is_descending(&self) -> bool {
        (1..self.len).all(|i| self.row(i).windows(2).all(|w| w[0] >= w[1]))
    }

    /// Drops position `pos` from both axes and renumbers the rest.
    pub(crate) fn without(&self, pos: usize) -> Self {
        let mut entries = Vec::with_capacity(triangular(self.len.saturating_sub(1)));
        for i in (0..self.len).filter(|&i| i != pos) {
            entries.extend(
                self.row(i)
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != pos)
                    .map(|(_, &bucket)| bucket),
            );
        }
        Self { len: self.len - 1, entries }
    }
}

/// A multi-time-interval sequence: ordered items plus a full timing matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    items: Vec<Item>,
    timings: TimingMatrix,
}

impl Pattern {
    pub fn new(items: Vec<Item>, entries: Vec<BucketIndex>) -> MiningResult<Self> {
        let timings = TimingMatrix::new(items.len(), entries)?;
        Ok(Self { items, timings })
    }

    pub fn from_rows(items: Vec<Item>, rows: Vec<Vec<BucketIndex>>) -> MiningResult<Self> {
        let timings = TimingMatrix::from_rows(items.len(), rows)?;
        Ok(Self { items, timings })
    }

    pub fn empty() -> Self {
        Self { items: Vec::new(), timings: TimingMatrix::default() }
    }

    pub fn single(item: impl Into<Item>) -> Self {
        Self {
            items: vec![item.into()],
            timings: TimingMatrix { len: 1, entries: Vec::new() },
        }
    }

    pub fn pair(first: impl Into<Item>, second: impl Into<Item>, bucket: BucketIndex) -> Self {
        Self {
            items: vec![first.into(), second.into()],
            timings: TimingMatrix { len: 2, entries: vec![bucket] },
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn timings(&self) -> &TimingMatrix {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn interval(&self, i: usize, j: usize) -> Option<BucketIndex> {
        self.timings.get(i, j)
    }

    pub fn is_descending(&self) -> bool {
        self.timings.is_descending()
    }

    /// The (k-1)-pattern left after deleting the item at `pos`.
    pub fn without(&self, pos: usize) -> MiningResult<Self> {
        if pos >= self.items.len() {
            return Err(MiningError::MalformedPattern(format!(
                "cannot drop position {} from a {}-pattern",
                pos,
                self.items.len()
            )));
        }
        let mut items = self.items.clone();
        items.remove(pos);
        Ok(Self { items, timings: self.timings.without(pos) })
    }

    /// Drops the last item.
    pub fn prefix(&self) -> MiningResult<Self> {
        self.without(self.items.len().saturating_sub(1))
    }

    /// Drops the first item.
    pub fn suffix(&self) -> MiningResult<Self> {
        self.without(0)
    }

    /// Checks every bucket index against the configured bucket list.
    pub fn validate(&self, discretizer: &Discretizer) -> MiningResult<()> {
        match self.timings.entries.iter().find(|&&bucket| bucket >= discretizer.len()) {
            Some(&bucket) => Err(MiningError::InvalidBucket(format!(
                "pattern {} references bucket {} of {}",
                self,
                bucket,
                discretizer.len()
            ))),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.items.join(", "))?;
        let mut sep = " |";
        for i in 1..self.timings.len {
            for (j, bucket) in self.timings.row(i).iter().enumerate() {
                write!(f, "{} {}-{}:t{}", sep, self.items[j], self.items[i], bucket)?;
                sep = "";
            }
        }
        write!(f, ">")
    }
}
