use std::cmp::Ordering;

use crate::types::{MatchCandidate, MatchOptions};

/// Filters, orders and truncates scored candidates.
///
/// - drops candidates below [`MatchOptions::effective_min_score`]
/// - sorts by score descending, then item name ascending ignoring case
/// - keeps at most `max_results`
///
/// Remaining ties fall back to the exact name, the price and the unit; the
/// sort is stable, so fully identical entries keep their input order.
pub fn rank(scored: Vec<MatchCandidate>, options: &MatchOptions) -> Vec<MatchCandidate> {
    if options.max_results == 0 {
        return Vec::new();
    }

    let min_score = options.effective_min_score();
    let mut kept: Vec<MatchCandidate> = scored
        .into_iter()
        .filter(|candidate| candidate.score >= min_score)
        .collect();

    kept.sort_by(compare_candidates);
    kept.truncate(options.max_results);
    kept
}

pub(crate) fn compare_candidates(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| cmp_ignore_case(&a.item.name, &b.item.name))
        .then_with(|| a.item.name.cmp(&b.item.name))
        .then_with(|| a.item.price.total_cmp(&b.item.price))
        .then_with(|| a.item.unit.cmp(&b.item.unit))
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
