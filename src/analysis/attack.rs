use super::correlation::KeySpace;
use super::factors::FactorCounts;
use super::kasiski::find_repeat_distances;
use super::key_length::select_key_lengths;
use crate::cipher::Key;
use crate::config::AnalysisConfig;
use crate::error::{VgResult, VigenereError};
use crate::profile::ReferenceProfile;
use crate::text::NormalizedText;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, info};

/// Factors listed in the report summary.
const REPORTED_FACTORS: usize = 10;

/// A generated key and the ciphertext decrypted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPreview {
    pub key: String,
    pub plaintext: String,
}

impl KeyPreview {
    /// The first `max` letters of the plaintext, with `...` appended when cut.
    pub fn preview(&self, max: usize) -> Cow<'_, str> {
        if self.plaintext.len() > max {
            Cow::Owned(format!("{}...", &self.plaintext[..max]))
        } else {
            Cow::Borrowed(&self.plaintext)
        }
    }
}

/// Keys generated for one key-length candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthTrial {
    pub key_length: usize,
    /// Shift sets per observed position, as letters (e.g. `["L", "E", "MN"]`).
    pub position_letters: Vec<String>,
    /// Positions with no letters; generated keys skip them.
    pub empty_positions: Vec<usize>,
    pub candidates: Vec<KeyPreview>,
}

impl LengthTrial {
    pub fn keys_found(&self) -> usize {
        self.candidates.len()
    }
}

/// Everything the attack produced, in a presentation-neutral form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackReport {
    pub profile: String,
    pub text_len: usize,
    pub distance_count: usize,
    /// Most frequent factors as `(factor, count)`.
    pub top_factors: Vec<(usize, usize)>,
    /// Ranked key-length candidates, longest first. Empty when no repeats were found.
    pub key_lengths: Vec<usize>,
    pub trials: Vec<LengthTrial>,
}

impl AttackReport {
    pub fn has_candidates(&self) -> bool {
        !self.key_lengths.is_empty()
    }

    /// Every generated key, in report order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.trials
            .iter()
            .flat_map(|t| t.candidates.iter().map(|c| c.key.as_str()))
    }
}

/// Runs the ciphertext-only attack against one reference profile.
///
/// Results are advisory: no candidate is marked as the answer.
pub struct Cryptanalyst {
    profile: ReferenceProfile,
    config: AnalysisConfig,
}

impl Cryptanalyst {
    pub fn new(profile: ReferenceProfile, config: AnalysisConfig) -> VgResult<Self> {
        config.validate()?;
        Ok(Self { profile, config })
    }

    pub fn profile(&self) -> &ReferenceProfile {
        &self.profile
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self, ciphertext: &str) -> VgResult<AttackReport> {
        let text = NormalizedText::new(ciphertext);
        info!(
            "Processing ciphertext in {} ({} letters)",
            self.profile.name(),
            text.len()
        );

        if !self.config.allow_oversized_text && text.len() > self.config.max_text_len {
            return Err(VigenereError::TextTooLong {
                len: text.len(),
                max: self.config.max_text_len,
            });
        }

        // 1. Kasiski examination
        let distances = find_repeat_distances(&text, &self.config);
        debug!("{} repeat distances", distances.len());

        // 2. Factor histogram
        let counts = FactorCounts::from_distances(&distances);
        debug!(
            "{} factors over {} distinct values",
            counts.total(),
            counts.len()
        );

        // 3. Key-length tie set
        let key_lengths = select_key_lengths(&counts, self.config.max_key_length_candidates);
        if key_lengths.is_empty() {
            info!("No key-length candidates");
        } else {
            info!("Possible key lengths: {:?}", key_lengths);
        }

        // 4. Keys for the top lengths, decrypted through the cipher core
        let mut trials = Vec::new();
        for &key_length in key_lengths.iter().take(self.config.lengths_to_try) {
            trials.push(self.try_length(&text, key_length)?);
        }

        Ok(AttackReport {
            profile: self.profile.name().to_string(),
            text_len: text.len(),
            distance_count: distances.len(),
            top_factors: counts.most_common(REPORTED_FACTORS),
            key_lengths,
            trials,
        })
    }

    /// Generates and previews keys for a single key length, bypassing the Kasiski stages.
    pub fn try_length(&self, text: &NormalizedText, key_length: usize) -> VgResult<LengthTrial> {
        let space = KeySpace::build(
            text,
            key_length,
            &self.profile,
            self.config.correlation_tolerance,
        );

        let mut candidates = Vec::new();
        for key_str in space.keys(self.config.max_keys_per_length) {
            let key = Key::parse(&key_str)?;
            candidates.push(KeyPreview {
                plaintext: key.decrypt(text).into_string(),
                key: key_str,
            });
        }
        info!(
            "Key length {}: {} keys generated",
            key_length,
            candidates.len()
        );

        Ok(LengthTrial {
            key_length,
            position_letters: space.positions.iter().map(|p| p.letters()).collect(),
            empty_positions: space.empty_positions,
            candidates,
        })
    }
}
