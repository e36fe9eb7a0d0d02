use std::collections::HashSet;

use super::super::sequence::Pattern;

/// Frequent patterns of one length, with their absolute support counts.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    patterns: Vec<Pattern>,
    supports: Vec<usize>,
    lookup: HashSet<Pattern>,
    pub pattern_len: usize,
}

/// Frequent levels of one mining run, shortest patterns first.
#[derive(Debug, Clone, Default)]
pub struct FrequentSequenceTable {
    levels: Vec<FrequentLevel>,
}

impl FrequentLevel {
    pub fn new(pattern_len: usize) -> Self {
        Self {
            patterns: Vec::new(),
            supports: Vec::new(),
            lookup: HashSet::new(),
            pattern_len,
        }
    }

    /// Adds `pattern` unless an equal one is already stored; returns its index.
    pub fn add_pattern_with_support(&mut self, pattern: Pattern, support: usize) -> usize {
        debug_assert_eq!(pattern.len(), self.pattern_len);
        if self.lookup.contains(&pattern) {
            if let Some(idx) = self.patterns.iter().position(|p| *p == pattern) {
                return idx;
            }
        }
        self.lookup.insert(pattern.clone());
        self.patterns.push(pattern);
        self.supports.push(support);
        self.patterns.len() - 1
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get_pattern(&self, idx: usize) -> &Pattern {
        &self.patterns[idx]
    }

    pub fn support_count(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.lookup.contains(pattern)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn iter_patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn iter_with_support(&self) -> impl Iterator<Item = (&Pattern, usize)> {
        self.patterns.iter().zip(self.supports.iter().copied())
    }
}

impl FrequentSequenceTable {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Appends the next level. Empty levels are dropped.
    pub(crate) fn push_level(&mut self, level: FrequentLevel) {
        debug_assert_eq!(level.pattern_len, self.levels.len() + 1);
        if !level.is_empty() {
            self.levels.push(level);
        }
    }

    /// Level holding the frequent `k`-patterns, if the run reached it.
    pub fn level(&self, k: usize) -> Option<&FrequentLevel> {
        k.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn max_pattern_len(&self) -> usize {
        self.levels.len()
    }

    pub fn total_patterns(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequentLevel> {
        self.levels.iter()
    }
}
