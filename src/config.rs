use crate::consts::*;
use crate::error::{VgResult, VigenereError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typed_builder::TypedBuilder;

/// Fixed thresholds of the analysis pipeline.
///
/// The value is passed by reference into every stage and never mutated by them,
/// so two runs with the same config and ciphertext produce the same report.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct AnalysisConfig {
    // === REPETITION SCAN ===
    #[arg(long, default_value_t = DEFAULT_MIN_PATTERN_LEN)]
    #[builder(default = DEFAULT_MIN_PATTERN_LEN)]
    pub min_pattern_len: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_PATTERN_LEN)]
    #[builder(default = DEFAULT_MAX_PATTERN_LEN)]
    pub max_pattern_len: usize,

    // === KEY LENGTH SELECTION ===
    #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH_CANDIDATES)]
    #[builder(default = DEFAULT_MAX_KEY_LENGTH_CANDIDATES)]
    pub max_key_length_candidates: usize,

    // === KEY GENERATION ===
    #[arg(long, default_value_t = DEFAULT_CORRELATION_TOLERANCE)]
    #[builder(default = DEFAULT_CORRELATION_TOLERANCE)]
    pub correlation_tolerance: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_KEYS_PER_LENGTH)]
    #[builder(default = DEFAULT_MAX_KEYS_PER_LENGTH)]
    pub max_keys_per_length: usize,

    // === INPUT GUARD ===
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_LEN)]
    #[builder(default = DEFAULT_MAX_TEXT_LEN)]
    pub max_text_len: usize,
    #[arg(long, default_value_t = false)]
    #[builder(default = false)]
    pub allow_oversized_text: bool,

    // === ORCHESTRATION & PREVIEW ===
    #[arg(long, default_value_t = DEFAULT_LENGTHS_TO_TRY)]
    #[builder(default = DEFAULT_LENGTHS_TO_TRY)]
    pub lengths_to_try: usize,
    #[arg(long, default_value_t = DEFAULT_KEYS_TO_SHOW)]
    #[builder(default = DEFAULT_KEYS_TO_SHOW)]
    pub keys_to_show: usize,
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    #[builder(default = DEFAULT_PREVIEW_LEN)]
    pub preview_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_pattern_len: DEFAULT_MIN_PATTERN_LEN,
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
            max_key_length_candidates: DEFAULT_MAX_KEY_LENGTH_CANDIDATES,
            correlation_tolerance: DEFAULT_CORRELATION_TOLERANCE,
            max_keys_per_length: DEFAULT_MAX_KEYS_PER_LENGTH,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            allow_oversized_text: false,
            lengths_to_try: DEFAULT_LENGTHS_TO_TRY,
            keys_to_show: DEFAULT_KEYS_TO_SHOW,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VgResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VgResult<()> {
        if self.min_pattern_len == 0 {
            return Err(VigenereError::Config(
                "min_pattern_len must be at least 1".to_string(),
            ));
        }
        if self.min_pattern_len > self.max_pattern_len {
            return Err(VigenereError::Config(format!(
                "min_pattern_len ({}) exceeds max_pattern_len ({})",
                self.min_pattern_len, self.max_pattern_len
            )));
        }
        if self.max_pattern_len > PATTERN_LEN_CEILING {
            return Err(VigenereError::Config(format!(
                "max_pattern_len ({}) exceeds the ceiling of {}",
                self.max_pattern_len, PATTERN_LEN_CEILING
            )));
        }
        if !(self.correlation_tolerance > 0.0 && self.correlation_tolerance <= 1.0) {
            return Err(VigenereError::Config(format!(
                "correlation_tolerance must be in (0, 1], got {}",
                self.correlation_tolerance
            )));
        }
        if self.max_key_length_candidates == 0 {
            return Err(VigenereError::Config(
                "max_key_length_candidates must be positive".to_string(),
            ));
        }
        if self.max_keys_per_length == 0 {
            return Err(VigenereError::Config(
                "max_keys_per_length must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The inclusive range of pattern lengths scanned for repeats.
    #[inline(always)]
    pub fn pattern_lengths(&self) -> std::ops::RangeInclusive<usize> {
        self.min_pattern_len..=self.max_pattern_len
    }

    /// Copies every field the user typed on the command line over `self`.
    /// Defaults filled in by clap are left alone so a config file keeps precedence over them.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(min_pattern_len);
        update_if_present!(max_pattern_len);
        update_if_present!(max_key_length_candidates);
        update_if_present!(correlation_tolerance);
        update_if_present!(max_keys_per_length);
        update_if_present!(max_text_len);
        update_if_present!(allow_oversized_text);
        update_if_present!(lengths_to_try);
        update_if_present!(keys_to_show);
        update_if_present!(preview_len);
    }
}
