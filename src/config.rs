//! YAML Configuration File Support for pricematch
//!
//! Loads normalizer, scoring and result-shaping settings from a single YAML
//! document so a deployment can tune matching without recompiling.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # pricematch configuration
//! version: "1.0"
//! name: "contractor defaults"
//!
//! normalize:
//!   fold_diacritics: true
//!   lowercase: true
//!   strip_punctuation: true
//!
//! scoring:
//!   token_weight: 0.6
//!   edit_weight: 0.4
//!   unit_mismatch_penalty: 0.85
//!   ngram_size: 3
//!   unit_aliases: true
//!
//! options:
//!   max_results: 3
//!   min_score: 0.5
//!   explain: false
//! ```
//!
//! Every section and field is optional.

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::{
    DEFAULT_EDIT_WEIGHT, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE, DEFAULT_NGRAM_SIZE,
    DEFAULT_TOKEN_WEIGHT, DEFAULT_UNIT_MISMATCH_PENALTY, MatchError, MatchOptions, PriceMatcher,
    ScoringConfig,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Top-level YAML configuration for price matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceMatchConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Normalizer settings shared by query and catalog names
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Scoring weights and unit policy
    #[serde(default)]
    pub scoring: ScoringYamlConfig,

    /// Result-shaping defaults
    #[serde(default)]
    pub options: OptionsYamlConfig,
}

impl PriceMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "config_read_failed");
        })?;
        let config = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            name = config.name.as_deref().unwrap_or(""),
            "config_loaded"
        );
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PriceMatchConfig = serde_yaml::from_str(yaml)?;
        if let Err(err) = config.validate() {
            warn!(error = %err, "config_rejected");
            return Err(err);
        }
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.scoring_config().validate()?;
        self.options.validate()?;

        Ok(())
    }

    /// Scoring settings with the shared normalizer section folded in.
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            token_weight: self.scoring.token_weight,
            edit_weight: self.scoring.edit_weight,
            unit_mismatch_penalty: self.scoring.unit_mismatch_penalty,
            ngram_size: self.scoring.ngram_size,
            unit_aliases: self.scoring.unit_aliases,
            normalize: self.normalize,
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            max_results: self.options.max_results,
            min_score: self.options.min_score,
            explain: self.options.explain,
        }
    }

    /// Builds a [`PriceMatcher`] from the scoring section.
    pub fn matcher(&self) -> Result<PriceMatcher, ConfigLoadError> {
        Ok(PriceMatcher::new(self.scoring_config())?)
    }
}

impl Default for PriceMatchConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            normalize: NormalizeConfig::default(),
            scoring: ScoringYamlConfig::default(),
            options: OptionsYamlConfig::default(),
        }
    }
}

/// Scoring YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringYamlConfig {
    #[serde(default = "default_token_weight")]
    pub token_weight: f64,

    #[serde(default = "default_edit_weight")]
    pub edit_weight: f64,

    #[serde(default = "default_unit_mismatch_penalty")]
    pub unit_mismatch_penalty: f64,

    /// Character n-gram width; 0 disables the typo fallback
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,

    #[serde(default = "true_value")]
    pub unit_aliases: bool,
}

impl Default for ScoringYamlConfig {
    fn default() -> Self {
        Self {
            token_weight: DEFAULT_TOKEN_WEIGHT,
            edit_weight: DEFAULT_EDIT_WEIGHT,
            unit_mismatch_penalty: DEFAULT_UNIT_MISMATCH_PENALTY,
            ngram_size: DEFAULT_NGRAM_SIZE,
            unit_aliases: true,
        }
    }
}

/// Result-shaping YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsYamlConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_min_score")]
    pub min_score: f64,

    #[serde(default)]
    pub explain: bool,
}

impl OptionsYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_results == 0 {
            return Err(ConfigLoadError::Validation(
                "options.max_results must be >= 1".to_string(),
            ));
        }
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigLoadError::Validation(
                "options.min_score must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OptionsYamlConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
            explain: false,
        }
    }
}

// Default value functions
fn default_version() -> String {
    "1.0".to_string()
}
fn true_value() -> bool {
    true
}
fn default_token_weight() -> f64 {
    DEFAULT_TOKEN_WEIGHT
}
fn default_edit_weight() -> f64 {
    DEFAULT_EDIT_WEIGHT
}
fn default_unit_mismatch_penalty() -> f64 {
    DEFAULT_UNIT_MISMATCH_PENALTY
}
fn default_ngram_size() -> usize {
    DEFAULT_NGRAM_SIZE
}
fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}
fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}
