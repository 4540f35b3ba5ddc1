use crate::consts::{ALPHABET_BASE, ALPHABET_LEN};
use deunicode::deunicode_char;
use serde::Serialize;
use std::fmt;

/// Text reduced to the 26-letter working alphabet.
///
/// Invariant: every byte is in `b'A'..=b'Z'`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Folds accents to their base letter, uppercases, and drops everything that is not a letter.
    ///
    /// Transliteration goes through `deunicode`, so ligatures expand (`"Æ"` becomes `"AE"`,
    /// `"ß"` becomes `"SS"`) and non-Latin scripts are romanized where a mapping exists.
    pub fn new(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_ascii() {
                if c.is_ascii_alphabetic() {
                    out.push(c.to_ascii_uppercase());
                }
                continue;
            }
            if let Some(folded) = deunicode_char(c) {
                out.extend(
                    folded
                        .chars()
                        .filter(|f| f.is_ascii_alphabetic())
                        .map(|f| f.to_ascii_uppercase()),
                );
            }
        }
        Self(out)
    }

    /// Wraps a string that is already made of `A..=Z` only.
    pub(crate) fn from_letters(letters: String) -> Self {
        debug_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
        Self(letters)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters as alphabet indices (`A` = 0 .. `Z` = 25).
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(letter_index)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`NormalizedText::new`].
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText::new(raw)
}

/// Maps an uppercase ASCII letter to its alphabet index.
#[inline(always)]
pub fn letter_index(letter: u8) -> u8 {
    letter - ALPHABET_BASE
}

/// Maps an alphabet index back to its uppercase letter. Indices wrap modulo 26.
#[inline(always)]
pub fn index_letter(index: u8) -> char {
    (ALPHABET_BASE + index % ALPHABET_LEN as u8) as char
}
