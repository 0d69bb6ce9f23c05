use criterion::{Criterion, criterion_group, criterion_main};
use phrase_corrector::{ConfusionMatrix, Corpus, SpellCorrector};
use std::hint::black_box;

fn corpus() -> Corpus {
    let text = "at the home locations were found and the results were sent to the \
                office where the team had met before the meeting started at noon";
    let mut corpus = Corpus::new(1.0);
    let words: Vec<&str> = text.split_whitespace().collect();
    for word in &words {
        corpus.add_ngram(word, 10);
    }
    for pair in words.windows(2) {
        corpus.add_ngram(&pair.join(" "), 5);
    }
    for word in ["he", "me", "hoe", "wore", "fund", "tea", "tam", "where", "sen", "offices"] {
        corpus.add_word(word);
    }
    corpus
}

fn confusion() -> ConfusionMatrix {
    let mut matrix = ConfusionMatrix::new();
    matrix.insert("m", "om", 12);
    matrix.insert("e", "a", 388);
    matrix.insert("ht", "th", 43);
    matrix.insert("es", "e", 30);
    matrix
}

fn bench_correct_phrase(c: &mut Criterion) {
    let corrector = SpellCorrector::new(corpus(), confusion());

    let phrases = [
        "at the hme locations were found",
        "the results were snt to the ofice",
        "the team had met before the meeting started at noon",
    ];

    c.bench_function("correct_one_unknown_word", |b| {
        b.iter(|| corrector.correct_phrase(black_box(phrases[0])))
    });
    c.bench_function("correct_two_unknown_words", |b| {
        b.iter(|| corrector.correct_phrase(black_box(phrases[1])))
    });
    c.bench_function("correct_clean_sentence", |b| {
        b.iter(|| corrector.correct_phrase(black_box(phrases[2])))
    });
    c.bench_function("correct_batch", |b| {
        b.iter(|| corrector.correct_phrases(black_box(&phrases[..])))
    });
}

criterion_group!(benches, bench_correct_phrase);
criterion_main!(benches);
