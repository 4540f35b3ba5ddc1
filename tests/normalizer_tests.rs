use rstest::rstest;
use vigenere::text::{index_letter, letter_index};
use vigenere::{normalize, NormalizedText};

#[rstest]
#[case("Hello, World!", "HELLOWORLD")]
#[case("Olá, Mundo!", "OLAMUNDO")]
#[case("Ação é ótima", "ACAOEOTIMA")]
#[case("coração", "CORACAO")]
#[case("naïve façade", "NAIVEFACADE")]
#[case("123 !? \t\n", "")]
#[case("", "")]
fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize(raw).as_str(), expected);
}

#[test]
fn test_normalize_is_idempotent() {
    let once = normalize("Será que funciona? Sim!");
    let twice = normalize(once.as_str());
    assert_eq!(once, twice);
}

#[test]
fn test_indices_are_alphabet_positions() {
    let text = NormalizedText::new("azB");
    let idx: Vec<u8> = text.indices().collect();
    assert_eq!(idx, vec![0, 25, 1]);
}

#[test]
fn test_letter_index_round_trip() {
    for i in 0..26u8 {
        assert_eq!(letter_index(index_letter(i) as u8), i);
    }
    // Indices wrap modulo the alphabet
    assert_eq!(index_letter(26), 'A');
}

#[test]
fn test_display_and_serialize() {
    let text = NormalizedText::from("x-y-z");
    assert_eq!(text.to_string(), "XYZ");
    assert_eq!(serde_json::to_string(&text).unwrap(), "\"XYZ\"");
    assert_eq!(text.len(), 3);
}
