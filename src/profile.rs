use crate::consts::ALPHABET_LEN;
use crate::error::{VgResult, VigenereError};
use crate::text::{letter_index, NormalizedText};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Letter frequencies in percent, `A..=Z`.
pub type FrequencyTable = [f64; ALPHABET_LEN];

const FREQ_PORTUGUESE: FrequencyTable = [
    14.63, 0.40, 3.88, 4.99, 12.57, 1.02, 1.30, 1.28, 6.18, 0.40, 0.02, 2.78, 4.74, 4.78, 10.73,
    2.52, 1.20, 6.53, 7.81, 4.34, 4.63, 1.67, 0.21, 0.02, 0.47, 0.00,
];

const FREQ_ENGLISH: FrequencyTable = [
    8.20, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.50, 1.93,
    0.10, 5.99, 6.33, 9.10, 2.76, 0.98, 2.36, 0.15, 1.97, 0.05,
];

/// Languages with a built-in reference profile.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Language {
    Portuguese,
    English,
}

impl Language {
    pub fn frequencies(&self) -> &'static FrequencyTable {
        match self {
            Self::Portuguese => &FREQ_PORTUGUESE,
            Self::English => &FREQ_ENGLISH,
        }
    }

    pub fn profile(&self) -> ReferenceProfile {
        ReferenceProfile {
            name: self.to_string(),
            frequencies: *self.frequencies(),
        }
    }

    /// Resolves a menu choice (`"1"` Portuguese, `"2"` English) or a language name.
    pub fn from_selection(choice: &str) -> VgResult<Self> {
        let choice = choice.trim();
        match choice {
            "1" => Ok(Self::Portuguese),
            "2" => Ok(Self::English),
            other => Self::from_str(other)
                .map_err(|_| VigenereError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Relative letter frequencies of one natural language. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceProfile {
    name: String,
    frequencies: FrequencyTable,
}

impl ReferenceProfile {
    pub fn new(name: impl Into<String>, frequencies: FrequencyTable) -> VgResult<Self> {
        if let Some((i, v)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(VigenereError::InvalidProfile(format!(
                "frequency for '{}' must be a non-negative number, got {}",
                crate::text::index_letter(i as u8),
                v
            )));
        }
        if frequencies.iter().sum::<f64>() <= 0.0 {
            return Err(VigenereError::InvalidProfile(
                "all frequencies are zero".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            frequencies,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[inline(always)]
    pub fn frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    /// Loads a `letter<TAB>percent` table. Letters missing from the file count as zero.
    /// Lines starting with `#` are ignored.
    pub fn load_from_tsv<P: AsRef<Path>>(path: P) -> VgResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        let file = File::open(path)?;
        Self::from_reader(name, file)
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> VgResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut frequencies = [0.0; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut rows = 0;

        for result in rdr.records() {
            let rec = result?;
            if rec.len() < 2 {
                continue;
            }
            let letter = NormalizedText::new(rec[0].trim());
            if letter.len() != 1 {
                return Err(VigenereError::InvalidProfile(format!(
                    "'{}' is not a single letter",
                    rec[0].trim()
                )));
            }
            let idx = letter_index(letter.as_bytes()[0]) as usize;
            if seen[idx] {
                return Err(VigenereError::InvalidProfile(format!(
                    "letter '{}' listed twice",
                    letter
                )));
            }
            let value: f64 = rec[1].trim().parse().map_err(|_| {
                VigenereError::InvalidProfile(format!(
                    "'{}' is not a number (letter '{}')",
                    rec[1].trim(),
                    letter
                ))
            })?;
            seen[idx] = true;
            frequencies[idx] = value;
            rows += 1;
        }

        debug!("Loaded {} letter frequencies", rows);
        Self::new(name, frequencies)
    }
}
