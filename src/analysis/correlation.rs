use crate::consts::ALPHABET_LEN;
use crate::profile::ReferenceProfile;
use crate::text::{index_letter, NormalizedText};
use itertools::structs::MultiProduct;
use itertools::Itertools;
use serde::Serialize;
use std::iter::{Copied, Take};
use std::slice;
use tracing::{debug, warn};

/// Letter histogram of one interleaved stream (`text[p], text[p + L], ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHistogram {
    pub counts: [usize; ALPHABET_LEN],
    pub total: usize,
}

impl StreamHistogram {
    pub fn collect(text: &NormalizedText, key_length: usize, position: usize) -> Self {
        let mut counts = [0; ALPHABET_LEN];
        let mut total = 0;
        for letter in text.indices().skip(position).step_by(key_length.max(1)) {
            counts[letter as usize] += 1;
            total += 1;
        }
        Self { counts, total }
    }
}

/// Correlation of the stream shifted back by `s` against the profile, for every `s`.
///
/// `score(s) = sum_c (counts[(c + s) mod 26] / total * 100) * profile[c]`.
/// An empty stream scores 0 everywhere.
pub fn shift_scores(hist: &StreamHistogram, profile: &ReferenceProfile) -> [f64; ALPHABET_LEN] {
    let mut scores = [0.0; ALPHABET_LEN];
    if hist.total == 0 {
        return scores;
    }
    let total = hist.total as f64;
    for (shift, score) in scores.iter_mut().enumerate() {
        *score = (0..ALPHABET_LEN)
            .map(|c| {
                let observed = hist.counts[(c + shift) % ALPHABET_LEN] as f64 / total * 100.0;
                observed * profile.frequency(c)
            })
            .sum();
    }
    scores
}

/// Near-best shifts for one key position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionCorrelation {
    pub position: usize,
    /// Letters observed in this position's stream.
    pub observed: usize,
    pub best_shift: u8,
    pub best_score: f64,
    /// Accepted shifts, ascending.
    pub shifts: Vec<u8>,
}

impl PositionCorrelation {
    /// Scores all 26 shifts and keeps those within `tolerance` of the best.
    /// Returns `None` when the position saw no letters.
    pub fn compute(
        text: &NormalizedText,
        key_length: usize,
        position: usize,
        profile: &ReferenceProfile,
        tolerance: f64,
    ) -> Option<Self> {
        let hist = StreamHistogram::collect(text, key_length, position);
        if hist.total == 0 {
            return None;
        }

        let scores = shift_scores(&hist, profile);

        // First maximum wins, so the lowest shift is reported on exact ties
        let (best_shift, best_score) = scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bs, bv), (s, &v)| {
                if v > bv {
                    (s, v)
                } else {
                    (bs, bv)
                }
            });

        let threshold = best_score * tolerance;
        let mut shifts: Vec<u8> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v >= threshold)
            .map(|(s, _)| s as u8)
            .collect();
        if shifts.is_empty() {
            shifts.push(best_shift as u8);
        }

        Some(Self {
            position,
            observed: hist.total,
            best_shift: best_shift as u8,
            best_score,
            shifts,
        })
    }

    pub fn letters(&self) -> String {
        self.shifts.iter().map(|&s| index_letter(s)).collect()
    }
}

/// Per-position shift sets for one key length; the source of key candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeySpace {
    pub key_length: usize,
    pub positions: Vec<PositionCorrelation>,
    /// Positions that saw no letters. A single one leaves the product empty:
    /// no full-length key can be formed.
    pub empty_positions: Vec<usize>,
}

impl KeySpace {
    pub fn build(
        text: &NormalizedText,
        key_length: usize,
        profile: &ReferenceProfile,
        tolerance: f64,
    ) -> Self {
        let mut positions = Vec::with_capacity(key_length);
        let mut empty_positions = Vec::new();

        for p in 0..key_length {
            match PositionCorrelation::compute(text, key_length, p, profile, tolerance) {
                Some(pc) => positions.push(pc),
                None => empty_positions.push(p),
            }
        }

        if !empty_positions.is_empty() {
            warn!(
                "Key length {}: positions {:?} have no letters, no keys can be generated",
                key_length, empty_positions
            );
        }
        debug!(
            "Key length {}: {} combinations",
            key_length,
            format_combinations(&positions)
        );

        Self {
            key_length,
            positions,
            empty_positions,
        }
    }

    /// Size of the full cartesian product, saturating.
    pub fn combinations(&self) -> usize {
        if self.positions.is_empty() || !self.empty_positions.is_empty() {
            return 0;
        }
        self.positions
            .iter()
            .fold(1usize, |acc, p| acc.saturating_mul(p.shifts.len()))
    }

    /// Lazily enumerates keys, at most `limit` of them.
    ///
    /// Order is fixed: position 0 varies slowest, shifts ascend within a position.
    /// Every call starts over from the first key. Every key is `key_length` letters long,
    /// so nothing is generated while any position is empty.
    pub fn keys(&self, limit: usize) -> KeyCandidates<'_> {
        if self.positions.is_empty() || !self.empty_positions.is_empty() {
            return KeyCandidates { inner: None };
        }
        let product = self
            .positions
            .iter()
            .map(|p| p.shifts.iter().copied())
            .multi_cartesian_product()
            .take(limit);
        KeyCandidates {
            inner: Some(product),
        }
    }
}

fn format_combinations(positions: &[PositionCorrelation]) -> String {
    positions.iter().map(|p| p.shifts.len()).join(" x ")
}

/// Lazy, finite sequence of key strings drawn from a [`KeySpace`].
#[derive(Clone)]
pub struct KeyCandidates<'a> {
    inner: Option<Take<MultiProduct<Copied<slice::Iter<'a, u8>>>>>,
}

impl Iterator for KeyCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let shifts = self.inner.as_mut()?.next()?;
        Some(shifts.into_iter().map(index_letter).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Language;

    #[test]
    fn test_histogram_stream_positions() {
        let text = NormalizedText::new("ABCABCA");
        let h = StreamHistogram::collect(&text, 3, 0);
        assert_eq!(h.total, 3);
        assert_eq!(h.counts[0], 3);
        let h = StreamHistogram::collect(&text, 3, 2);
        assert_eq!(h.total, 2);
        assert_eq!(h.counts[2], 2);
    }

    #[test]
    fn test_single_letter_stream_prefers_e() {
        // A stream of only 'E' correlates best with shift 0 in English (E is the top letter)
        let text = NormalizedText::new("EEEEEEEE");
        let pc = PositionCorrelation::compute(&text, 1, 0, &Language::English.profile(), 0.98)
            .unwrap();
        assert_eq!(pc.best_shift, 0);
        assert_eq!(pc.shifts, vec![0]);
    }
}
