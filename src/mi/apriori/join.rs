use super::super::error::{MiningError, MiningResult};
use super::super::interval::Discretizer;
use super::super::sequence::Pattern;

/// Whether `p1` and `p2` overlap on a shared (k-2)-sub-pattern.
///
/// The last `k-2` items of `p1` must equal the first `k-2` items of `p2`, and
/// the timing between those shared items must agree exactly.
pub fn is_joinable(p1: &Pattern, p2: &Pattern) -> bool {
    let m = p1.len();
    if m < 2 || p2.len() != m {
        return false;
    }
    if p1.items()[1..] != p2.items()[..m - 1] {
        return false;
    }

    (2..m).all(|i| (1..i).all(|j| p1.interval(i, j) == p2.interval(i - 1, j - 1)))
}

/// Combines two frequent (k-1)-patterns into the k-pattern candidates they
/// support. Returns an empty list when the parents do not overlap.
///
/// The candidate keeps `p1` for every pair not touching the new last item and
/// takes the new last row from `p2`. The one unknown bucket, first item to
/// new last item, is enumerated from the compatibility table and kept only
/// where the row stays descending.
pub fn join(p1: &Pattern, p2: &Pattern, discretizer: &Discretizer) -> MiningResult<Vec<Pattern>> {
    if !is_joinable(p1, p2) {
        return Ok(Vec::new());
    }

    let m = p1.len();
    let malformed = || MiningError::MalformedPattern(format!("cannot join {} with {}", p1, p2));

    // first item to the previous last item, and previous last to the new last
    let first_span = p1.interval(m - 1, 0).ok_or_else(malformed)?;
    let last_span = p2.interval(m - 1, m - 2).ok_or_else(malformed)?;
    let (a, b) = if first_span >= last_span {
        (first_span, last_span)
    } else {
        (last_span, first_span)
    };

    let inherited_row = p2.timings().row(m - 1);
    let floor = inherited_row.first().copied().ok_or_else(malformed)?;

    let table = discretizer.compatibility_table();
    let outer = table
        .get(a)
        .and_then(|row| row.get(b))
        .ok_or_else(|| MiningError::InvalidBucket(format!("no compatibility entry for ({}, {})", a, b)))?;

    let mut items = p1.items().to_vec();
    if let Some(last) = p2.items().last() {
        items.push(last.clone());
    }

    let mut candidates = Vec::new();
    for &bucket in outer.iter().filter(|&&bucket| bucket >= floor) {
        let mut entries = p1.timings().entries().to_vec();
        entries.push(bucket);
        entries.extend_from_slice(inherited_row);
        candidates.push(Pattern::new(items.clone(), entries)?);
    }

    Ok(candidates)
}
