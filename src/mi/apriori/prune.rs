use super::super::error::MiningResult;
use super::super::sequence::Pattern;
use super::super::utils::FrequentLevel;

/// Whether every one-item deletion of `candidate` is in `previous`.
pub fn has_frequent_subsequences(candidate: &Pattern, previous: &FrequentLevel) -> MiningResult<bool> {
    for pos in 0..candidate.len() {
        if !previous.contains(&candidate.without(pos)?) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Keeps the candidates whose (k-1)-subsequences are all known frequent.
pub fn prune(candidates: Vec<Pattern>, previous: &FrequentLevel) -> MiningResult<Vec<Pattern>> {
    let mut survivors = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if has_frequent_subsequences(&candidate, previous)? {
            survivors.push(candidate);
        }
    }
    Ok(survivors)
}
