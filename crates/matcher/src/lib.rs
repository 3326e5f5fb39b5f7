//! # Pricematch Matcher (`matcher`)
//!
//! ## Purpose
//!
//! Given a free-text line-item name (often from speech transcription, so
//! noisy) and an optional unit, `matcher` searches the user's saved price
//! catalog and proposes ranked candidates so a missing price can be filled
//! in. It sits on top of the `canonical` crate, which owns normalization.
//!
//! Data flows one way:
//!
//! ```text
//! name, unit ─▶ normalize ─▶ tokenize ─▶ score (per catalog entry) ─▶ rank ─▶ candidates
//! ```
//!
//! ## Core Types
//!
//! - [`PriceListItem`]: one catalog entry (`name`, `price`, optional `unit`).
//! - [`MatchQuery`]: the line item being matched.
//! - [`MatchOptions`]: `max_results`, `min_score` and `explain`.
//! - [`MatchCandidate`]: a catalog item paired with its score in `[0, 1]`.
//! - [`ScoringConfig`] / [`Scorer`]: weights and unit policy for scoring.
//! - [`PriceMatcher`]: injectable service; [`PreparedCatalog`] memoizes
//!   normalized catalog entries across several queries.
//!
//! ## Guarantees
//!
//! - At most `max_results` candidates, each with `score >= min_score`.
//! - Sorted by score descending, ties by item name ignoring case.
//! - Same inputs, same output. No I/O, no shared mutable state, no panics
//!   on malformed input: the worst case is an empty list.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{get_price_match_candidates, MatchOptions, PriceListItem};
//!
//! let catalog = vec![
//!     PriceListItem::new("Drywall Sheet 4x8", 35.0).with_unit("ea"),
//!     PriceListItem::new("Interior Wall Paint", 42.5).with_unit("gal"),
//!     PriceListItem::new("Outlet Installation", 45.0).with_unit("ea"),
//! ];
//!
//! let hits = get_price_match_candidates(
//!     "paint wall - interior",
//!     Some("gallon"),
//!     &catalog,
//!     &MatchOptions::default(),
//! );
//! assert_eq!(hits[0].item.name, "Interior Wall Paint");
//! assert!(hits.iter().all(|hit| hit.score >= 0.5));
//! ```

pub mod engine;
pub mod rank;
pub mod scoring;
pub mod types;

pub use crate::engine::{get_price_match_candidates, PreparedCatalog, PriceMatcher};
pub use crate::rank::rank;
pub use crate::scoring::{
    score, Scorer, ScoringConfig, DEFAULT_EDIT_WEIGHT, DEFAULT_NGRAM_SIZE, DEFAULT_TOKEN_WEIGHT,
    DEFAULT_UNIT_MISMATCH_PENALTY,
};
pub use crate::types::{
    MatchCandidate, MatchError, MatchOptions, MatchQuery, PriceListItem, ScoreBreakdown,
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE,
};
