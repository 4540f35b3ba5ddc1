/// Number of symbols in the working alphabet (A..=Z).
pub const ALPHABET_LEN: usize = 26;

/// Byte value of the first letter of the alphabet.
pub const ALPHABET_BASE: u8 = b'A';

/// Shortest repeated pattern the repetition scan looks for.
pub const DEFAULT_MIN_PATTERN_LEN: usize = 2;

/// Longest repeated pattern the repetition scan looks for.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 5;

/// Largest `max_pattern_len` a config may ask for.
pub const PATTERN_LEN_CEILING: usize = 1_000;

/// Upper bound on ranked key-length candidates kept after factor counting.
pub const DEFAULT_MAX_KEY_LENGTH_CANDIDATES: usize = 40;

/// Relative tolerance for accepting a shift as a near-tie of the best one.
pub const DEFAULT_CORRELATION_TOLERANCE: f64 = 0.98;

/// Upper bound on key strings enumerated for a single key length.
pub const DEFAULT_MAX_KEYS_PER_LENGTH: usize = 100;

/// Largest normalized text the attack accepts.
/// The repetition scan is quadratic, so this is the practical ceiling.
pub const DEFAULT_MAX_TEXT_LEN: usize = 10_000;

/// Number of top-ranked key lengths the attack expands into keys.
pub const DEFAULT_LENGTHS_TO_TRY: usize = 3;

/// Number of keys per length shown by the presentation layer.
pub const DEFAULT_KEYS_TO_SHOW: usize = 5;

/// Number of letters shown in a decrypted preview.
pub const DEFAULT_PREVIEW_LEN: usize = 60;
