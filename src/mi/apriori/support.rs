use super::super::error::{MiningError, MiningResult};
use super::super::interval::Discretizer;
use super::super::sequence::{Database, Pattern};
use super::containment::contains;

/// Number of transactions containing `pattern`.
pub fn support_count(pattern: &Pattern, database: &Database, discretizer: &Discretizer) -> usize {
    database
        .iter()
        .filter(|transaction| contains(transaction, pattern, discretizer))
        .count()
}

/// Fraction of transactions containing `pattern`.
pub fn support(pattern: &Pattern, database: &Database, discretizer: &Discretizer) -> MiningResult<f64> {
    if database.is_empty() {
        return Err(MiningError::EmptyDatabase);
    }
    let count = support_count(pattern, database, discretizer);
    Ok(count as f64 / database.len() as f64)
}

/// Number of transactions holding `item` at least once.
pub fn one_item_count(item: &str, database: &Database) -> usize {
    database.iter().filter(|transaction| transaction.has_item(item)).count()
}

/// Fraction of transactions holding `item` at least once.
pub fn one_item_support(item: &str, database: &Database) -> MiningResult<f64> {
    if database.is_empty() {
        return Err(MiningError::EmptyDatabase);
    }
    Ok(one_item_count(item, database) as f64 / database.len() as f64)
}

/// Smallest support count that still reaches `min_support` over `num_transactions` rows.
pub fn min_count(min_support: f64, num_transactions: usize) -> usize {
    let exact = min_support * num_transactions as f64;
    // absorb float noise such as 0.7 * 10 = 7.000000000000001
    let rounded = exact.round();
    let count = if (exact - rounded).abs() < 1e-9 {
        rounded as usize
    } else {
        exact.ceil() as usize
    };
    count.max(1)
}
