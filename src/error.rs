use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigenereError {
    #[error("Key must contain at least one letter")]
    EmptyKey,

    #[error("Text has {len} letters, the analysis limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("Unsupported language selection: '{0}'")]
    UnknownLanguage(String),

    #[error("Invalid frequency profile: {0}")]
    InvalidProfile(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VgResult<T> = Result<T, VigenereError>;
