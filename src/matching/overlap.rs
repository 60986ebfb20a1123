use std::collections::HashSet;
use std::hash::Hash;

pub(crate) fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Normalized overlap ratio `|A ∩ B| / |A ∪ B|` between two tag collections,
/// treating each side as a set. Yields 0 when both sides are empty.
pub fn jaccard<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    safe_divide(intersection as f64, union as f64)
}
