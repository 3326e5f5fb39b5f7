//! Lexical similarity between a line-item name and one catalog entry.
//!
//! The score blends two signals over normalized names:
//!
//! - **token overlap**: Jaccard of the word sets, or of the character
//!   n-gram sets when that is higher. Robust to word order and to extra or
//!   missing qualifier words ("interior wall paint" vs "paint wall - interior").
//! - **edit similarity**: `1 - levenshtein / max_len`. Tolerates the small
//!   typos that break exact token equality ("instalation").
//!
//! A unit mismatch scales the blended score down instead of rejecting the
//! entry, since units are frequently missing or mis-transcribed.

use std::collections::HashSet;
use std::hash::Hash;

use canonical::{canonical_unit, char_ngrams, normalize_with, tokenize, unit_key, NormalizeConfig};
use serde::{Deserialize, Serialize};

use crate::types::{MatchError, MatchQuery, PriceListItem, ScoreBreakdown};

pub const DEFAULT_TOKEN_WEIGHT: f64 = 0.6;
pub const DEFAULT_EDIT_WEIGHT: f64 = 0.4;
pub const DEFAULT_UNIT_MISMATCH_PENALTY: f64 = 0.85;
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Weights and policies used by [`Scorer`].
///
/// ```yaml
/// token_weight: 0.6
/// edit_weight: 0.4
/// unit_mismatch_penalty: 0.85
/// ngram_size: 3
/// unit_aliases: true
/// normalize:
///   fold_diacritics: true
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the token-overlap signal.
    pub token_weight: f64,
    /// Weight of the edit-similarity signal.
    pub edit_weight: f64,
    /// Factor in `[0, 1]` applied when both sides carry different units.
    pub unit_mismatch_penalty: f64,
    /// Character n-gram width for the typo fallback; 0 disables it.
    pub ngram_size: usize,
    /// Fold unit spellings ("each", "pcs") before comparing units.
    pub unit_aliases: bool,
    /// Normalizer settings applied to both names.
    pub normalize: NormalizeConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            token_weight: DEFAULT_TOKEN_WEIGHT,
            edit_weight: DEFAULT_EDIT_WEIGHT,
            unit_mismatch_penalty: DEFAULT_UNIT_MISMATCH_PENALTY,
            ngram_size: DEFAULT_NGRAM_SIZE,
            unit_aliases: true,
            normalize: NormalizeConfig::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        for (label, weight) in [
            ("token_weight", self.token_weight),
            ("edit_weight", self.edit_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{label} must be a finite value >= 0.0"
                )));
            }
        }
        if self.token_weight + self.edit_weight <= 0.0 {
            return Err(MatchError::InvalidConfig(
                "token_weight + edit_weight must be greater than zero".into(),
            ));
        }
        if !self.unit_mismatch_penalty.is_finite()
            || !(0.0..=1.0).contains(&self.unit_mismatch_penalty)
        {
            return Err(MatchError::InvalidConfig(
                "unit_mismatch_penalty must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn unit_of(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?;
        if self.unit_aliases {
            canonical_unit(raw)
        } else {
            unit_key(raw)
        }
    }
}

/// A name normalized and split once, reusable across many comparisons.
#[derive(Debug, Clone)]
pub(crate) struct PreparedName {
    text: String,
    char_len: usize,
    tokens: HashSet<String>,
    ngrams: HashSet<String>,
}

impl PreparedName {
    pub(crate) fn new(raw: &str, cfg: &ScoringConfig) -> Self {
        let text = normalize_with(raw, &cfg.normalize);
        let words = tokenize(&text);
        let ngrams = words
            .iter()
            .flat_map(|word| char_ngrams(word, cfg.ngram_size))
            .collect();
        let tokens = words.into_iter().map(str::to_string).collect();
        let char_len = text.chars().count();

        Self {
            text,
            char_len,
            tokens,
            ngrams,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Scores queries against catalog entries with a validated [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Similarity of `candidate` to `query`, in `[0, 1]`.
    pub fn score(&self, query: &MatchQuery, candidate: &PriceListItem) -> f64 {
        self.score_explained(query, candidate).0
    }

    /// Like [`Scorer::score`], also returning the per-signal breakdown.
    pub fn score_explained(
        &self,
        query: &MatchQuery,
        candidate: &PriceListItem,
    ) -> (f64, ScoreBreakdown) {
        let query_name = PreparedName::new(&query.name, &self.config);
        let candidate_name = PreparedName::new(&candidate.name, &self.config);
        let query_unit = self.config.unit_of(query.unit.as_deref());
        let candidate_unit = self.config.unit_of(candidate.unit.as_deref());

        self.score_prepared(
            &query_name,
            query_unit.as_deref(),
            &candidate_name,
            candidate_unit.as_deref(),
        )
    }

    pub(crate) fn score_prepared(
        &self,
        query: &PreparedName,
        query_unit: Option<&str>,
        candidate: &PreparedName,
        candidate_unit: Option<&str>,
    ) -> (f64, ScoreBreakdown) {
        let mut breakdown = self.lexical(query, candidate);

        let mut score = breakdown.lexical;
        if let (Some(q), Some(c)) = (query_unit, candidate_unit) {
            if q != c {
                score *= self.config.unit_mismatch_penalty;
                breakdown.unit_penalty_applied = true;
            }
        }

        (score.clamp(0.0, 1.0), breakdown)
    }

    fn lexical(&self, query: &PreparedName, candidate: &PreparedName) -> ScoreBreakdown {
        let ngrams_enabled = self.config.ngram_size > 0;

        if query.is_empty() || candidate.is_empty() {
            return ScoreBreakdown {
                ngram_overlap: ngrams_enabled.then_some(0.0),
                ..ScoreBreakdown::default()
            };
        }

        if query.text == candidate.text {
            return ScoreBreakdown {
                token_overlap: 1.0,
                ngram_overlap: ngrams_enabled.then_some(1.0),
                edit_similarity: 1.0,
                lexical: 1.0,
                unit_penalty_applied: false,
            };
        }

        let token_overlap = jaccard(&query.tokens, &candidate.tokens);
        let ngram_overlap = ngrams_enabled.then(|| jaccard(&query.ngrams, &candidate.ngrams));
        let overlap = token_overlap.max(ngram_overlap.unwrap_or(0.0));
        let edit_similarity = edit_similarity(query, candidate);

        let total_weight = self.config.token_weight + self.config.edit_weight;
        let lexical = (self.config.token_weight * overlap + self.config.edit_weight * edit_similarity)
            / total_weight;

        ScoreBreakdown {
            token_overlap,
            ngram_overlap,
            edit_similarity,
            lexical: lexical.clamp(0.0, 1.0),
            unit_penalty_applied: false,
        }
    }
}

/// Similarity of `candidate` to `query` under the default [`ScoringConfig`].
///
/// ```rust
/// use matcher::{score, MatchQuery, PriceListItem};
///
/// let item = PriceListItem::new("Outlet Installation", 45.0).with_unit("ea");
/// assert_eq!(score(&MatchQuery::new("outlet installation"), &item), 1.0);
/// assert!(score(&MatchQuery::new("outlet instalation"), &item) >= 0.5);
/// ```
pub fn score(query: &MatchQuery, candidate: &PriceListItem) -> f64 {
    Scorer::default().score(query, candidate)
}

fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn edit_similarity(a: &PreparedName, b: &PreparedName) -> f64 {
    let max_len = a.char_len.max(b.char_len);
    if max_len == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(&a.text, &b.text);
    1.0 - distance as f64 / max_len as f64
}
