use super::factors::FactorCounts;
use tracing::debug;

/// Ranks key-length candidates from a factor histogram.
///
/// Keeps every factor whose count equals the maximum (the whole tie set), longest first,
/// truncated to `max_candidates`. Counts are integers so the tie test is exact.
pub fn select_key_lengths(counts: &FactorCounts, max_candidates: usize) -> Vec<usize> {
    let Some(max_count) = counts.max_count() else {
        debug!("No factors, no key-length candidates");
        return Vec::new();
    };

    let mut tied: Vec<usize> = counts
        .iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(f, _)| f)
        .collect();
    tied.sort_unstable_by(|a, b| b.cmp(a));
    tied.truncate(max_candidates);

    debug!(
        "Key-length tie set at count {}: {:?}",
        max_count, tied
    );
    tied
}
