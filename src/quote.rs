//! Quote line items and price suggestions for the ones still missing a price.

use std::time::Instant;

use matcher::{MatchCandidate, MatchOptions, MatchQuery, PriceListItem, PriceMatcher};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug};

/// A single line on a quote being drafted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Unit price; `None` until the user types one or accepts a suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl LineItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            price: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when the item has no usable price yet.
    pub fn needs_price(&self) -> bool {
        !self.price.is_some_and(f64::is_finite)
    }

    /// Accepts a suggestion: takes its price, and its unit only when this
    /// item has none of its own.
    pub fn apply_candidate(&mut self, candidate: &MatchCandidate) {
        self.price = Some(candidate.item.price);
        let blank_unit = self.unit.as_deref().is_none_or(|u| u.trim().is_empty());
        if blank_unit {
            if let Some(unit) = &candidate.item.unit {
                self.unit = Some(unit.clone());
            }
        }
    }

    fn query(&self) -> MatchQuery {
        MatchQuery::from_parts(&self.name, self.unit.as_deref())
    }
}

/// Candidates proposed for the line item at `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemSuggestion {
    pub index: usize,
    pub candidates: Vec<MatchCandidate>,
}

/// Suggests catalog prices for every unpriced line item, using the default
/// scoring configuration.
pub fn suggest_for_line_items(
    items: &[LineItem],
    price_list: &[PriceListItem],
    options: &MatchOptions,
) -> Vec<LineItemSuggestion> {
    suggest_with(&PriceMatcher::default(), items, price_list, options)
}

/// Same as [`suggest_for_line_items`] with a caller-supplied matcher.
///
/// Items that already carry a finite price are skipped, as are items with
/// no candidate above the threshold. The catalog is prepared once for the
/// whole quote.
pub fn suggest_with(
    matcher: &PriceMatcher,
    items: &[LineItem],
    price_list: &[PriceListItem],
    options: &MatchOptions,
) -> Vec<LineItemSuggestion> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "pricematch.suggest",
        line_items = items.len(),
        catalog_size = price_list.len()
    );
    let _guard = span.enter();

    if price_list.is_empty() {
        debug!("empty price list, no suggestions");
        return Vec::new();
    }

    let catalog = matcher.prepare(price_list);
    let suggestions: Vec<LineItemSuggestion> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.needs_price())
        .filter_map(|(index, item)| {
            let candidates = catalog.candidates(&item.query(), options);
            (!candidates.is_empty()).then_some(LineItemSuggestion { index, candidates })
        })
        .collect();

    debug!(
        suggested = suggestions.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "suggest_complete"
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(price: f64, unit: Option<&str>) -> MatchCandidate {
        let mut item = PriceListItem::new("Labor", price);
        item.unit = unit.map(str::to_string);
        MatchCandidate {
            item,
            score: 1.0,
            breakdown: None,
        }
    }

    #[test]
    fn needs_price_treats_non_finite_as_missing() {
        assert!(LineItem::new("a").needs_price());
        assert!(LineItem::new("a").with_price(f64::NAN).needs_price());
        assert!(LineItem::new("a").with_price(f64::INFINITY).needs_price());
        assert!(!LineItem::new("a").with_price(0.0).needs_price());
    }

    #[test]
    fn apply_candidate_fills_blank_unit() {
        let mut item = LineItem::new("labour").with_unit("  ");
        item.apply_candidate(&candidate(65.0, Some("hr")));
        assert_eq!(item.price, Some(65.0));
        assert_eq!(item.unit.as_deref(), Some("hr"));
    }

    #[test]
    fn apply_candidate_keeps_existing_unit() {
        let mut item = LineItem::new("labour").with_unit("day").with_price(1.0);
        item.apply_candidate(&candidate(65.0, Some("hr")));
        assert_eq!(item.price, Some(65.0));
        assert_eq!(item.unit.as_deref(), Some("day"));
    }

    #[test]
    fn apply_candidate_without_unit_leaves_unit_unset() {
        let mut item = LineItem::new("labour");
        item.apply_candidate(&candidate(65.0, None));
        assert_eq!(item.unit, None);
    }

    #[test]
    fn line_items_deserialize_with_optional_fields() {
        let item: LineItem = serde_json::from_str(r#"{"name":"Tile"}"#).unwrap();
        assert_eq!(item, LineItem::new("Tile"));
    }
}
