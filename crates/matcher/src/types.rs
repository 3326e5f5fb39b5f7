use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback for [`MatchOptions::max_results`].
pub const DEFAULT_MAX_RESULTS: usize = 3;
/// Fallback for [`MatchOptions::min_score`].
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// One entry of the user's saved price catalog.
///
/// The matcher only ever reads these; candidates carry their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceListItem {
    /// Display name, e.g. "Outlet Installation".
    pub name: String,
    /// Unit price in the catalog's currency.
    pub price: f64,
    /// Optional pricing unit, e.g. "ea" or "sq ft".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl PriceListItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// The quote line item being matched against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchQuery {
    /// Free-text item name, often straight from speech transcription.
    pub name: String,
    /// Unit spoken or typed for the line item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MatchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Builds a query from borrowed parts, as handed over by a UI layer.
    pub fn from_parts(name: &str, unit: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.map(str::to_string),
        }
    }
}

/// Per-signal scores behind a candidate's final score.
///
/// Only populated when [`MatchOptions::explain`] is set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Jaccard similarity of the word-token sets.
    pub token_overlap: f64,
    /// Jaccard similarity of the character n-gram sets; `None` when n-grams
    /// are disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngram_overlap: Option<f64>,
    /// `1 - levenshtein / max_len` over the normalized names.
    pub edit_similarity: f64,
    /// Weighted combination before the unit adjustment.
    pub lexical: f64,
    /// Whether both sides carried different units.
    pub unit_penalty_applied: bool,
}

/// A catalog entry proposed for a line item, with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchCandidate {
    pub item: PriceListItem,
    /// Similarity in `[0, 1]`; 1 means the normalized names are equal.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Result-shaping options for a single match call.
///
/// Missing fields deserialize to the documented fallbacks
/// ([`DEFAULT_MAX_RESULTS`], [`DEFAULT_MIN_SCORE`], no explanations).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchOptions {
    /// Maximum number of candidates returned. Zero yields no results.
    #[serde(default = "MatchOptions::default_max_results")]
    pub max_results: usize,
    /// Minimum score a candidate needs to be returned.
    #[serde(default = "MatchOptions::default_min_score")]
    pub min_score: f64,
    /// Attach a [`ScoreBreakdown`] to every candidate.
    #[serde(default)]
    pub explain: bool,
}

impl MatchOptions {
    pub(crate) fn default_max_results() -> usize {
        DEFAULT_MAX_RESULTS
    }

    pub(crate) fn default_min_score() -> f64 {
        DEFAULT_MIN_SCORE
    }

    pub fn new(max_results: usize, min_score: f64) -> Self {
        Self {
            max_results,
            min_score,
            explain: false,
        }
    }

    /// The threshold actually applied: non-finite values fall back to
    /// [`DEFAULT_MIN_SCORE`].
    pub fn effective_min_score(&self) -> f64 {
        if self.min_score.is_finite() {
            self.min_score
        } else {
            DEFAULT_MIN_SCORE
        }
    }

    /// Strict validation for callers that prefer errors over coercion.
    ///
    /// The matcher itself never calls this; it coerces instead.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(
                "min_score must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE)
    }
}

/// Errors raised when validating matcher configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
