//! Workspace umbrella crate for pricematch.
//!
//! Re-exports the normalizer from `canonical` and the matching engine from
//! `matcher`, and adds what an application needs around them: YAML
//! configuration ([`PriceMatchConfig`]) and quote line-item helpers
//! ([`suggest_for_line_items`], [`LineItem::apply_candidate`]).
//!
//! ```
//! use pricematch::{LineItem, MatchOptions, PriceListItem, suggest_for_line_items};
//!
//! let catalog = vec![
//!     PriceListItem::new("Outlet Installation", 45.0).with_unit("ea"),
//!     PriceListItem::new("Labor", 65.0).with_unit("hr"),
//! ];
//! let mut quote = vec![
//!     LineItem::new("outlet instalation"),
//!     LineItem::new("Labor").with_unit("hr").with_price(70.0),
//! ];
//!
//! let suggestions = suggest_for_line_items(&quote, &catalog, &MatchOptions::default());
//! assert_eq!(suggestions.len(), 1);
//! let first = &suggestions[0];
//! quote[first.index].apply_candidate(&first.candidates[0]);
//! assert_eq!(quote[0].price, Some(45.0));
//! assert_eq!(quote[0].unit.as_deref(), Some("ea"));
//! ```

mod config;
mod quote;

pub use canonical::{
    NormalizeConfig, canonical_unit, char_ngrams, collapse_whitespace, normalize, normalize_with,
    tokenize, unit_key,
};
pub use matcher::{
    DEFAULT_EDIT_WEIGHT, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE, DEFAULT_NGRAM_SIZE,
    DEFAULT_TOKEN_WEIGHT, DEFAULT_UNIT_MISMATCH_PENALTY, MatchCandidate, MatchError,
    MatchOptions, MatchQuery, PreparedCatalog, PriceListItem, PriceMatcher, ScoreBreakdown,
    Scorer, ScoringConfig, get_price_match_candidates, rank, score,
};

pub use crate::config::{ConfigLoadError, OptionsYamlConfig, PriceMatchConfig, ScoringYamlConfig};
pub use crate::quote::{LineItem, LineItemSuggestion, suggest_for_line_items, suggest_with};
