mod common;

use common::{periodic_ciphertext, ALPHABET, DICKENS};
use rstest::rstest;
use vigenere::analysis::factors::{factorize, factorize_distances};
use vigenere::analysis::{find_repeat_distances, select_key_lengths, FactorCounts};
use vigenere::config::AnalysisConfig;
use vigenere::{encrypt, NormalizedText};

fn distances_for(text: &str) -> Vec<usize> {
    find_repeat_distances(&NormalizedText::new(text), &AnalysisConfig::default())
}

fn key_lengths_for(text: &str) -> Vec<usize> {
    let counts = FactorCounts::from_distances(&distances_for(text));
    select_key_lengths(&counts, AnalysisConfig::default().max_key_length_candidates)
}

#[test]
fn test_repeated_block_reports_distance_per_sub_pattern() {
    // ABCD recurs at distance 10: AB, BC, CD (k=2), ABC, BCD (k=3), ABCD (k=4)
    let distances = distances_for("ABCDEFGHIJABCD");
    assert_eq!(distances, vec![10; 6]);
}

#[test]
fn test_pattern_range_limits_scan() {
    let config = AnalysisConfig::builder()
        .min_pattern_len(4)
        .max_pattern_len(4)
        .build();
    let text = NormalizedText::new("ABCDEFGHIJABCD");
    assert_eq!(find_repeat_distances(&text, &config), vec![10]);
}

#[test]
fn test_no_repeats_gives_no_candidates() {
    assert!(distances_for(ALPHABET).is_empty());
    assert!(key_lengths_for(ALPHABET).is_empty());
    assert!(distances_for("").is_empty());
}

#[test]
fn test_distances_follow_scan_order() {
    // k=2 first (AB at 0 and 3), then k=3 (none)
    assert_eq!(distances_for("ABXAB"), vec![3]);
}

#[test]
fn test_overlapping_matches_are_counted() {
    // Every later start is compared, so "AA" also matches one letter on
    assert_eq!(distances_for("AAAA"), vec![1, 2, 1, 1]);
}

#[test]
fn test_pattern_lengths_beyond_text_are_skipped() {
    let config = AnalysisConfig::builder().max_pattern_len(usize::MAX).build();
    let text = NormalizedText::new("ABCDEFGHIJABCD");
    assert_eq!(find_repeat_distances(&text, &config), vec![10; 6]);
}

#[rstest]
#[case(2, vec![2])]
#[case(3, vec![3])]
#[case(4, vec![4, 2])]
#[case(5, vec![5])]
#[case(6, vec![6, 3, 2])]
#[case(7, vec![7])]
#[case(8, vec![8, 4, 2])]
#[case(9, vec![9, 3])]
#[case(10, vec![10, 5, 2])]
#[case(12, vec![12, 6, 4, 3, 2])]
fn test_periodic_ciphertext_ranks_divisors(#[case] key_length: usize, #[case] expected: Vec<usize>) {
    let (ciphertext, _) = periodic_ciphertext(key_length, 6);
    let distances = distances_for(&ciphertext);
    assert!(!distances.is_empty());
    assert!(distances.iter().all(|d| d % key_length == 0));
    assert_eq!(key_lengths_for(&ciphertext), expected);
}

#[rstest]
#[case("LEMON", 5)]
#[case("KEY", 3)]
#[case("DICKENS", 7)]
fn test_english_prose_reveals_key_length(#[case] key: &str, #[case] key_length: usize) {
    let ciphertext = encrypt(DICKENS, key).unwrap();
    assert_eq!(key_lengths_for(ciphertext.as_str()), vec![key_length]);
}

#[test]
fn test_factor_multiset_keeps_duplicates() {
    assert_eq!(factorize(30), vec![2, 3, 5, 6, 10, 15, 30]);
    assert_eq!(factorize_distances(&[6, 6, 1]), vec![2, 3, 6, 2, 3, 6]);
}

#[test]
fn test_most_common_prefers_count_then_larger_factor() {
    let counts = FactorCounts::from_factors(&[2, 2, 3, 3, 5, 7, 7, 7]);
    assert_eq!(counts.total(), 8);
    assert_eq!(counts.len(), 4);
    assert_eq!(counts.most_common(3), vec![(7, 3), (3, 2), (2, 2)]);
}

#[test]
fn test_tie_set_is_sorted_descending_and_capped() {
    let counts = FactorCounts::from_factors(&[2, 2, 3, 3, 5]);
    assert_eq!(select_key_lengths(&counts, 40), vec![3, 2]);
    assert_eq!(select_key_lengths(&counts, 1), vec![3]);
    assert!(select_key_lengths(&FactorCounts::default(), 40).is_empty());
}
