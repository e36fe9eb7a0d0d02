use super::super::interval::Discretizer;
use super::super::sequence::{Pattern, Transaction};

/// Whether `transaction` holds an occurrence of `pattern`.
///
/// Pattern items are assigned to strictly increasing transaction positions,
/// and the span between every pair of assigned items must fall into the
/// bucket the timing matrix names for that pair. The search backtracks over
/// all occurrences and stops at the first complete assignment.
pub fn contains(transaction: &Transaction, pattern: &Pattern, discretizer: &Discretizer) -> bool {
    if pattern.is_empty() {
        return true;
    }
    if pattern.len() > transaction.len() {
        return false;
    }

    let mut chosen = Vec::with_capacity(pattern.len());
    match_recursive(transaction, pattern, discretizer, 0, &mut chosen)
}

fn match_recursive(
    transaction: &Transaction,
    pattern: &Pattern,
    discretizer: &Discretizer,
    start: usize,
    chosen: &mut Vec<usize>,
) -> bool {
    let depth = chosen.len();
    if depth == pattern.len() {
        return true;
    }

    let events = transaction.events();
    let item = &pattern.items()[depth];
    let row = pattern.timings().row(depth);
    // leave room for the items still to be placed
    let remaining = pattern.len() - depth - 1;
    let end = events.len().saturating_sub(remaining);

    for pos in start..end {
        let event = &events[pos];
        if event.item != *item {
            continue;
        }

        let timing_ok = chosen.iter().zip(row).all(|(&prev, &bucket)| {
            discretizer.bucket_of(event.timestamp.saturating_sub(events[prev].timestamp)) == Some(bucket)
        });
        if !timing_ok {
            continue;
        }

        chosen.push(pos);
        if match_recursive(transaction, pattern, discretizer, pos + 1, chosen) {
            return true;
        }
        chosen.pop();
    }

    false
}
