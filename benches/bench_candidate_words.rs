use criterion::{Criterion, criterion_group, criterion_main};
use phrase_corrector::{ConfusionMatrix, Corpus, SpellCorrector, single_edits};
use std::hint::black_box;

fn bench_candidate_words(c: &mut Criterion) {
    let mut corpus = Corpus::default();
    for word in [
        "the", "he", "she", "then", "them", "there", "these", "home", "hoe", "come", "locations",
        "location", "spelling", "spilling", "selling",
    ] {
        corpus.add_word(word);
    }
    let corrector = SpellCorrector::new(corpus, ConfusionMatrix::new());

    c.bench_function("single_edits_short", |b| {
        b.iter(|| single_edits(black_box("hte")))
    });
    c.bench_function("single_edits_long", |b| {
        b.iter(|| single_edits(black_box("locatoins")))
    });
    c.bench_function("candidate_words", |b| {
        b.iter(|| corrector.candidate_words(black_box("speling")))
    });
    c.bench_function("edit_likelihood", |b| {
        b.iter(|| corrector.edit_likelihood(black_box("the"), black_box("hte")))
    });
}

criterion_group!(benches, bench_candidate_words);
criterion_main!(benches);
