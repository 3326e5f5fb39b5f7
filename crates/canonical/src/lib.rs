//! Pricematch canonical text layer.
//!
//! Normalizes line-item names, catalog entries and units into a form the
//! matcher can compare lexically. Everything here is a pure function of its
//! input and config.
//!
//! ## What we do
//!
//! - Diacritic folding (NFKD + combining-mark removal, configurable)
//! - Locale-free lowercasing
//! - Punctuation and symbols treated as word delimiters
//! - Whitespace collapsing to single spaces, trimmed at both ends
//! - Word tokenization and character n-grams for typo tolerance
//! - Unit canonicalization ("each", "pcs", "ea." all become `ea`)
//!
//! ## Invariants worth knowing
//!
//! - [`normalize`] never fails; junk input normalizes to `""`
//! - Normalized text never has leading, trailing or doubled spaces
//! - No I/O, no clock calls, no OS/locale dependence

mod config;
mod normalize;
mod token;
mod unit;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::normalize::{normalize, normalize_with};
pub use crate::token::{char_ngrams, tokenize};
pub use crate::unit::{canonical_unit, unit_key};
pub use crate::whitespace::collapse_whitespace;
