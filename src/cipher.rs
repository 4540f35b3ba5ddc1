use crate::consts::ALPHABET_LEN;
use crate::error::{VgResult, VigenereError};
use crate::text::{index_letter, NormalizedText};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A repeating Vigenere key. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Key {
    letters: NormalizedText,
}

impl Key {
    /// Normalizes `raw` the same way as message text and keeps the letters.
    /// A key with no letters left is rejected.
    pub fn parse(raw: &str) -> VgResult<Self> {
        let letters = NormalizedText::new(raw);
        if letters.is_empty() {
            return Err(VigenereError::EmptyKey);
        }
        Ok(Self { letters })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.letters.as_str()
    }

    /// Shift applied at text position `i`.
    #[inline(always)]
    fn shift_at(&self, i: usize) -> u8 {
        let bytes = self.letters.as_bytes();
        crate::text::letter_index(bytes[i % bytes.len()])
    }

    /// Shifts every letter of `text` by the key letter at the same position (mod key length).
    pub fn apply(&self, text: &NormalizedText, direction: Direction) -> NormalizedText {
        let alphabet = ALPHABET_LEN as u8;
        let shifted: String = text
            .indices()
            .enumerate()
            .map(|(i, letter)| {
                let shift = self.shift_at(i);
                match direction {
                    Direction::Encrypt => index_letter((letter + shift) % alphabet),
                    Direction::Decrypt => index_letter((letter + alphabet - shift) % alphabet),
                }
            })
            .collect();
        NormalizedText::from_letters(shifted)
    }

    pub fn encrypt(&self, plaintext: &NormalizedText) -> NormalizedText {
        self.apply(plaintext, Direction::Encrypt)
    }

    pub fn decrypt(&self, ciphertext: &NormalizedText) -> NormalizedText {
        self.apply(ciphertext, Direction::Decrypt)
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letters.as_str())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.letters.into_string()
    }
}

/// Normalizes both inputs and runs the cipher in the given direction.
pub fn transform(text: &str, key: &str, direction: Direction) -> VgResult<NormalizedText> {
    let key = Key::parse(key)?;
    Ok(key.apply(&NormalizedText::new(text), direction))
}

pub fn encrypt(plaintext: &str, key: &str) -> VgResult<NormalizedText> {
    transform(plaintext, key, Direction::Encrypt)
}

pub fn decrypt(ciphertext: &str, key: &str) -> VgResult<NormalizedText> {
    transform(ciphertext, key, Direction::Decrypt)
}
