//! Configuration for the normalizer.
//!
//! [`NormalizeConfig`] controls how raw line-item names and catalog entries
//! are canonicalized before they are compared. The defaults are the ones the
//! matcher uses; they are tuned for short, noisy, speech-transcribed names.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(config.fold_diacritics);
//! assert!(config.lowercase);
//! assert!(config.strip_punctuation);
//! ```
//!
//! ## Keeping punctuation
//!
//! ```rust
//! use canonical::{normalize_with, NormalizeConfig};
//!
//! let config = NormalizeConfig {
//!     strip_punctuation: false,
//!     ..Default::default()
//! };
//! assert_eq!(normalize_with("2x4 stud, 8'", &config), "2x4 stud, 8'");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`normalize_with`](crate::normalize_with).
///
/// Cheap to clone and serde-friendly so it can be embedded in a YAML
/// configuration file:
///
/// ```yaml
/// fold_diacritics: true
/// lowercase: true
/// strip_punctuation: true
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// If true, decompose with NFKD and drop combining marks so that
    /// "Café" and "cafe" compare equal.
    ///
    /// When disabled the text is still NFKC-composed, so composed and
    /// decomposed spellings of the same accented letter stay equal to each
    /// other but differ from the unaccented form.
    pub fold_diacritics: bool,

    /// If true, apply locale-free Unicode lowercasing.
    pub lowercase: bool,

    /// If true, punctuation and symbol characters become word delimiters.
    ///
    /// ```text
    /// "Paint (wall) - interior" → "paint wall interior"
    /// "Sq.Ft."                  → "sq ft"
    /// ```
    pub strip_punctuation: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            fold_diacritics: true,
            lowercase: true,
            strip_punctuation: true,
        }
    }
}
