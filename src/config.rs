//! Tunable parameters of the correction pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// Configuration for [`crate::SpellCorrector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Count used in place of a zero confusion count. `1.0` is add-one
    /// smoothing; around `41.0` substitutes the average count of the
    /// standard 1-edit table.
    pub zero_count_smoothing: f64,
    /// Divisor applied to confusion counts. Should exceed the largest count
    /// in the table so likelihoods stay below one.
    pub confusion_scale: f64,
    /// Keep at most this many edit-distance-1 neighbours per word, the most
    /// likely under the channel model first.
    pub max_candidates_per_word: Option<usize>,
    /// Stop enumerating once this many distinct sentences exist.
    pub max_sentences: Option<usize>,
    /// Weight of the summed unigram frequency of the whole candidate.
    pub sentence_frequency_weight: f64,
    /// Exponent applied to the channel likelihood at each changed word.
    /// `0.0` ranks on bigram evidence alone.
    pub channel_exponent: f64,
    /// Log the candidate matrix and the best ranked sentences at debug level.
    pub trace: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            zero_count_smoothing: 1.0,
            confusion_scale: 920.0,
            max_candidates_per_word: Some(32),
            max_sentences: Some(100_000),
            sentence_frequency_weight: 0.0,
            channel_exponent: 0.0,
            trace: false,
        }
    }
}

impl CorrectorConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CorrectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.zero_count_smoothing.is_finite() && self.zero_count_smoothing > 0.0) {
            return Err(SpellError::invalid_config(format!(
                "zero_count_smoothing must be positive, got {}",
                self.zero_count_smoothing
            )));
        }
        if !(self.confusion_scale.is_finite() && self.confusion_scale > 0.0) {
            return Err(SpellError::invalid_config(format!(
                "confusion_scale must be positive, got {}",
                self.confusion_scale
            )));
        }
        if self.max_candidates_per_word == Some(0) {
            return Err(SpellError::invalid_config(
                "max_candidates_per_word must be at least 1",
            ));
        }
        if self.max_sentences == Some(0) {
            return Err(SpellError::invalid_config("max_sentences must be at least 1"));
        }
        if !self.sentence_frequency_weight.is_finite() {
            return Err(SpellError::invalid_config(
                "sentence_frequency_weight must be finite",
            ));
        }
        if !(self.channel_exponent.is_finite() && self.channel_exponent >= 0.0) {
            return Err(SpellError::invalid_config(format!(
                "channel_exponent must be non-negative, got {}",
                self.channel_exponent
            )));
        }
        Ok(())
    }
}
