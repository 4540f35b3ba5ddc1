use crate::config::AnalysisConfig;
use crate::text::NormalizedText;
use tracing::debug;

/// Kasiski examination over every pattern length in the config range.
///
/// For each pattern length `k` and each start `i`, every later start `j` (stepping by one)
/// whose window equals `text[i..i + k]` records `j - i`. Nothing is deduplicated: a physical
/// repeat is reported once per pattern length that sees it, and overlapping or nested
/// matches are reported independently. Cost is quadratic in the text length.
pub fn find_repeat_distances(text: &NormalizedText, config: &AnalysisConfig) -> Vec<usize> {
    let bytes = text.as_bytes();
    let n = bytes.len();
    let mut distances = Vec::new();

    for k in config.pattern_lengths() {
        // Lengths ascend, nothing longer fits either
        if k > n {
            break;
        }
        if k == 0 {
            continue;
        }
        let before = distances.len();
        let last_start = n - k;

        for i in 0..=last_start {
            let pattern = &bytes[i..i + k];
            for j in (i + 1)..=last_start {
                // Cheap first-byte reject before the slice compare
                if bytes[j] == pattern[0] && &bytes[j..j + k] == pattern {
                    distances.push(j - i);
                }
            }
        }

        debug!(
            "Pattern length {}: {} repeat distances",
            k,
            distances.len() - before
        );
    }

    distances
}
