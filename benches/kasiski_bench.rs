use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vigenere::analysis::{find_repeat_distances, Cryptanalyst};
use vigenere::config::AnalysisConfig;
use vigenere::profile::Language;
use vigenere::{encrypt, NormalizedText};

const SAMPLE: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness";

/// Ciphertext of at least `letters` letters, cut to exactly that length.
fn ciphertext(letters: usize) -> NormalizedText {
    let mut plain = String::new();
    while vigenere::normalize(&plain).len() < letters {
        plain.push_str(SAMPLE);
    }
    let mut text = encrypt(&plain, "LEMON")
        .expect("Key has letters")
        .into_string();
    text.truncate(letters);
    NormalizedText::new(&text)
}

fn criterion_benchmark(c: &mut Criterion) {
    let config = AnalysisConfig::default();

    let mut group = c.benchmark_group("kasiski");
    group.sample_size(10);
    for letters in [1_000, 5_000, 10_000] {
        let text = ciphertext(letters);
        group.bench_with_input(BenchmarkId::from_parameter(letters), &text, |b, text| {
            b.iter(|| find_repeat_distances(black_box(text), &config))
        });
    }
    group.finish();

    let analyst = Cryptanalyst::new(Language::English.profile(), config.clone())
        .expect("Default config is valid");
    let text = ciphertext(2_000).into_string();
    c.bench_function("full attack (2k letters)", |b| {
        b.iter(|| analyst.run(black_box(&text)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
