use std::collections::HashSet;

use super::super::config::MiningConfig;
use super::super::error::{MiningError, MiningResult};
use super::super::interval::Discretizer;
use super::super::sequence::{Database, Pattern, Transaction};
use super::super::utils::{FrequentLevel, FrequentSequenceTable};
use super::containment;
use super::join::{is_joinable, join};
use super::prune::prune;
use super::support::{min_count, one_item_count, support_count};

/// Run context for level-wise MI-Apriori over one database.
#[derive(Debug, Clone)]
pub struct Miner<'a> {
    database: &'a Database,
    discretizer: Discretizer,
    config: MiningConfig,
}

impl<'a> Miner<'a> {
    pub fn new(database: &'a Database, config: MiningConfig) -> MiningResult<Self> {
        config.validate()?;
        let discretizer = Discretizer::new(config.buckets.clone())?;
        Ok(Self { database, discretizer, config })
    }

    pub fn discretizer(&self) -> &Discretizer {
        &self.discretizer
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn contains(&self, transaction: &Transaction, pattern: &Pattern) -> MiningResult<bool> {
        pattern.validate(&self.discretizer)?;
        Ok(containment::contains(transaction, pattern, &self.discretizer))
    }

    pub fn support_count(&self, pattern: &Pattern) -> MiningResult<usize> {
        pattern.validate(&self.discretizer)?;
        Ok(support_count(pattern, self.database, &self.discretizer))
    }

    pub fn support(&self, pattern: &Pattern) -> MiningResult<f64> {
        if self.database.is_empty() {
            return Err(MiningError::EmptyDatabase);
        }
        let count = self.support_count(pattern)?;
        Ok(count as f64 / self.database.len() as f64)
    }

    /// Mines every frequent pattern up to the configured maximum length.
    pub fn run(&self) -> MiningResult<FrequentSequenceTable> {
        if self.database.is_empty() {
            return Err(MiningError::EmptyDatabase);
        }

        let threshold = min_count(self.config.min_support, self.database.len());
        tracing::info!(
            transactions = self.database.len(),
            buckets = self.discretizer.len(),
            min_support = self.config.min_support,
            min_count = threshold,
            max_length = self.config.max_length,
            "Starting MI-Apriori run"
        );

        let mut table = FrequentSequenceTable::new();

        let level_one = self.frequent_items(threshold);
        tracing::debug!(level = 1, frequent = level_one.len(), "Level complete");
        table.push_level(level_one);

        for k in 2..=self.config.max_length {
            let Some(previous) = table.level(k - 1) else { break };

            let candidates = if k == 2 {
                self.pair_candidates(previous)
            } else {
                let joined = self.join_level(previous)?;
                let generated = joined.len();
                let survivors = prune(joined, previous)?;
                tracing::debug!(level = k, generated, pruned = generated - survivors.len(), "Candidates pruned");
                survivors
            };

            let level = self.count_level(k, candidates, threshold);
            tracing::debug!(level = k, frequent = level.len(), "Level complete");
            if level.is_empty() {
                break;
            }
            table.push_level(level);
        }

        tracing::info!(
            levels = table.max_pattern_len(),
            patterns = table.total_patterns(),
            "MI-Apriori run finished"
        );
        Ok(table)
    }

    /// Items present in at least `threshold` rows; repeats within a row count once.
    fn frequent_items(&self, threshold: usize) -> FrequentLevel {
        let mut level = FrequentLevel::new(1);
        for item in self.database.distinct_items() {
            let count = one_item_count(&item, self.database);
            if count >= threshold {
                level.add_pattern_with_support(Pattern::single(item), count);
            }
        }
        level
    }

    /// Every ordered pair of frequent items, including an item with itself,
    /// under every bucket.
    fn pair_candidates(&self, items: &FrequentLevel) -> Vec<Pattern> {
        let mut candidates = Vec::with_capacity(items.len() * items.len() * self.discretizer.len());
        for first in items.iter_patterns() {
            for second in items.iter_patterns() {
                for bucket in 0..self.discretizer.len() {
                    candidates.push(Pattern::pair(first.items()[0].clone(), second.items()[0].clone(), bucket));
                }
            }
        }
        candidates
    }

    fn join_level(&self, previous: &FrequentLevel) -> MiningResult<Vec<Pattern>> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for p1 in previous.iter_patterns() {
            for p2 in previous.iter_patterns() {
                if !is_joinable(p1, p2) {
                    continue;
                }
                let joined = join(p1, p2, &self.discretizer)?;
                if joined.is_empty() {
                    tracing::trace!(left = %p1, right = %p2, "Join produced no candidates");
                }
                for candidate in joined {
                    if seen.insert(candidate.clone()) {
                        candidates.push(candidate);
                    }
                }
            }
        }
        Ok(candidates)
    }

    fn count_level(&self, k: usize, candidates: Vec<Pattern>, threshold: usize) -> FrequentLevel {
        let mut level = FrequentLevel::new(k);
        for candidate in candidates {
            let count = support_count(&candidate, self.database, &self.discretizer);
            if count >= threshold {
                level.add_pattern_with_support(candidate, count);
            }
        }
        level
    }
}

/// Runs a full mining pass over `database` with `config`.
pub fn mine(database: &Database, config: MiningConfig) -> MiningResult<FrequentSequenceTable> {
    Miner::new(database, config)?.run()
}
