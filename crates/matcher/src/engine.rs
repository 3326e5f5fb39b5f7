use std::time::Instant;

use tracing::{debug, trace, Level};

use crate::rank::rank;
use crate::scoring::{PreparedName, Scorer, ScoringConfig};
use crate::types::{MatchCandidate, MatchError, MatchOptions, MatchQuery, PriceListItem};

#[cfg(test)]
mod tests;

/// Proposes catalog entries for a line item, best first.
///
/// Pure and infallible: malformed input degrades to an empty list. Returns
/// `[]` for an empty price list, a name that is blank after normalization,
/// or `max_results == 0`.
///
/// ```rust
/// use matcher::{get_price_match_candidates, MatchOptions, PriceListItem};
///
/// let catalog = vec![
///     PriceListItem::new("Outlet Installation", 45.0).with_unit("ea"),
///     PriceListItem::new("Drywall Sheet 4x8", 35.0).with_unit("ea"),
/// ];
/// let hits = get_price_match_candidates("outlet instalation", None, &catalog, &MatchOptions::default());
/// assert_eq!(hits[0].item.name, "Outlet Installation");
/// ```
pub fn get_price_match_candidates(
    name: &str,
    unit: Option<&str>,
    price_list: &[PriceListItem],
    options: &MatchOptions,
) -> Vec<MatchCandidate> {
    let query = MatchQuery::from_parts(name, unit);
    PriceMatcher::default().candidates(&query, price_list, options)
}

/// Injectable matching service holding a validated [`ScoringConfig`].
///
/// Holds no per-call state; share it freely and let callers decide when to
/// recompute and what to cache.
#[derive(Debug, Clone, Default)]
pub struct PriceMatcher {
    scorer: Scorer,
}

impl PriceMatcher {
    pub fn new(config: ScoringConfig) -> Result<Self, MatchError> {
        Ok(Self {
            scorer: Scorer::new(config)?,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Ranked candidates for a single query.
    pub fn candidates(
        &self,
        query: &MatchQuery,
        price_list: &[PriceListItem],
        options: &MatchOptions,
    ) -> Vec<MatchCandidate> {
        if price_list.is_empty() || options.max_results == 0 {
            trace!(
                catalog_size = price_list.len(),
                max_results = options.max_results,
                "match_skipped"
            );
            return Vec::new();
        }
        self.prepare(price_list).candidates(query, options)
    }

    /// Normalizes every catalog entry once so several queries can share the work.
    pub fn prepare<'a>(&self, price_list: &'a [PriceListItem]) -> PreparedCatalog<'a> {
        let config = self.scorer.config();
        let entries = price_list
            .iter()
            .map(|item| PreparedEntry {
                item,
                name: PreparedName::new(&item.name, config),
                unit: config.unit_of(item.unit.as_deref()),
            })
            .collect();

        PreparedCatalog {
            scorer: self.scorer.clone(),
            entries,
        }
    }

    /// Answers each query in order against one prepared copy of the catalog.
    pub fn match_batch(
        &self,
        queries: &[MatchQuery],
        price_list: &[PriceListItem],
        options: &MatchOptions,
    ) -> Vec<Vec<MatchCandidate>> {
        if price_list.is_empty() || options.max_results == 0 {
            return vec![Vec::new(); queries.len()];
        }
        let catalog = self.prepare(price_list);
        queries
            .iter()
            .map(|query| catalog.candidates(query, options))
            .collect()
    }
}

struct PreparedEntry<'a> {
    item: &'a PriceListItem,
    name: PreparedName,
    unit: Option<String>,
}

/// A price list with its names and units normalized up front.
///
/// Borrows the caller's list for its own lifetime only; candidates it returns
/// own copies of the matched items.
pub struct PreparedCatalog<'a> {
    scorer: Scorer,
    entries: Vec<PreparedEntry<'a>>,
}

impl PreparedCatalog<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked candidates for `query`; identical to [`PriceMatcher::candidates`].
    pub fn candidates(&self, query: &MatchQuery, options: &MatchOptions) -> Vec<MatchCandidate> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "matcher.candidates",
            catalog_size = self.entries.len(),
            max_results = options.max_results
        );
        let _guard = span.enter();

        if self.entries.is_empty() || options.max_results == 0 {
            return Vec::new();
        }

        let config = self.scorer.config();
        let query_name = PreparedName::new(&query.name, config);
        if query_name.is_empty() {
            trace!("query name blank after normalization");
            return Vec::new();
        }
        let query_unit = config.unit_of(query.unit.as_deref());

        let min_score = options.effective_min_score();
        if !options.min_score.is_finite() {
            debug!(
                min_score = options.min_score,
                fallback = min_score,
                "non-finite min_score replaced"
            );
        }

        // Threshold before cloning items; `rank` re-applies it.
        let scored: Vec<MatchCandidate> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let (score, breakdown) = self.scorer.score_prepared(
                    &query_name,
                    query_unit.as_deref(),
                    &entry.name,
                    entry.unit.as_deref(),
                );
                (score >= min_score).then(|| MatchCandidate {
                    item: entry.item.clone(),
                    score,
                    breakdown: options.explain.then_some(breakdown),
                })
            })
            .collect();

        let above_threshold = scored.len();
        let ranked = rank(scored, options);

        debug!(
            scored = self.entries.len(),
            above_threshold,
            returned = ranked.len(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "match_complete"
        );

        ranked
    }
}
