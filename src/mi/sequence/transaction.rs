use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use super::super::error::{MiningError, MiningResult};
use super::super::interval::Timestamp;

pub type Item = String;

/// One `(item, timestamp)` occurrence inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    pub item: Item,
    pub timestamp: Timestamp,
}

/// A timestamp-ordered row of the database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Item, Timestamp)>", into = "Vec<(Item, Timestamp)>")]
pub struct Transaction {
    events: Vec<Event>,
}

impl Transaction {
    pub fn new<I, S>(events: I) -> MiningResult<Self>
    where
        I: IntoIterator<Item = (S, Timestamp)>,
        S: Into<Item>,
    {
        let events: Vec<Event> = events
            .into_iter()
            .map(|(item, timestamp)| Event { item: item.into(), timestamp })
            .collect();

        if let Some(pos) = events.windows(2).position(|w| w[1].timestamp < w[0].timestamp) {
            return Err(MiningError::InvalidTransaction(format!(
                "timestamp {} at position {} precedes {}",
                events[pos + 1].timestamp,
                pos + 1,
                events[pos].timestamp
            )));
        }

        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.events.iter().any(|event| event.item == item)
    }
}

impl TryFrom<Vec<(Item, Timestamp)>> for Transaction {
    type Error = MiningError;

    fn try_from(rows: Vec<(Item, Timestamp)>) -> Result<Self, Self::Error> {
        Transaction::new(rows)
    }
}

impl From<Transaction> for Vec<(Item, Timestamp)> {
    fn from(transaction: Transaction) -> Self {
        transaction
            .events
            .into_iter()
            .map(|event| (event.item, event.timestamp))
            .collect()
    }
}

/// The full set of transactions a mining run scans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    transactions: Vec<Transaction>,
}

impl Database {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn from_json_str(json: &str) -> MiningResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> MiningResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Every item seen in any transaction, sorted.
    pub fn distinct_items(&self) -> BTreeSet<Item> {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.events.iter())
            .map(|event| event.item.clone())
            .collect()
    }
}

impl FromIterator<Transaction> for Database {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
