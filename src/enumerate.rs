//! Whole-sentence candidate enumeration.
//!
//! The model assumes at most two misspelled words per sentence, and that a
//! word next to a misspelling is itself correct. How the candidate space is
//! explored depends on how many words fail the vocabulary check:
//!
//! * none: a real-word error may still hide anywhere, so one position from
//!   each half of the sentence is varied together;
//! * one: the flagged word is varied, then each result is varied again at
//!   every position not adjacent to it;
//! * two: only the two flagged words are varied.

use std::collections::HashSet;

use log::warn;

use crate::candidates::CandidateSet;
use crate::error::{Result, SpellError};
use crate::oracle::Vocabulary;

/// Most unknown words a phrase may contain.
pub const MAX_UNKNOWN_WORDS: usize = 2;

/// A rewrite of the phrase, the same length as the original.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSentence {
    pub words: Vec<String>,
    pub score: f64,
}

impl CandidateSentence {
    pub fn new(words: Vec<String>) -> Self {
        CandidateSentence { words, score: 0.0 }
    }

    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Positions where this sentence differs from `original`. Positions past
    /// the shorter of the two are ignored.
    pub fn changed_positions(&self, original: &[String]) -> Vec<usize> {
        changed_positions(&self.words, original)
    }
}

pub(crate) fn changed_positions(words: &[String], original: &[String]) -> Vec<usize> {
    words
        .iter()
        .zip(original)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

/// Positions whose word is not in the vocabulary.
pub fn wrong_positions<V: Vocabulary + ?Sized>(vocabulary: &V, words: &[String]) -> Vec<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, word)| !vocabulary.contains(word))
        .map(|(i, _)| i)
        .collect()
}

/// Reduce the sets next to each wrong position to the original word. A
/// neighbour that is itself wrong keeps its set.
pub fn lock_neighbours(sets: &mut [CandidateSet], words: &[String], wrong: &[usize]) {
    for &w in wrong {
        let neighbours = [w.checked_sub(1), Some(w + 1)];
        for i in neighbours.into_iter().flatten() {
            if i < words.len() && i < sets.len() && !wrong.contains(&i) {
                sets[i] = CandidateSet::locked(&words[i]);
            }
        }
    }
}

/// Distinct sentences in insertion order, up to an optional limit.
struct SentencePool {
    seen: HashSet<Vec<String>>,
    sentences: Vec<CandidateSentence>,
    limit: Option<usize>,
}

impl SentencePool {
    fn new(limit: Option<usize>) -> Self {
        SentencePool {
            seen: HashSet::new(),
            sentences: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.sentences.len() >= limit)
    }

    /// Returns false once the pool is full.
    fn push(&mut self, words: Vec<String>) -> bool {
        if self.is_full() {
            return false;
        }
        if self.seen.insert(words.clone()) {
            self.sentences.push(CandidateSentence::new(words));
        }
        !self.is_full()
    }

    fn into_sentences(self) -> Vec<CandidateSentence> {
        if self.is_full() {
            warn!(
                "sentence enumeration stopped at {} candidates",
                self.sentences.len()
            );
        }
        self.sentences
    }
}

fn replaced(words: &[String], at: usize, word: &str) -> Vec<String> {
    let mut sentence = words.to_vec();
    sentence[at] = word.to_string();
    sentence
}

/// Enumerate the sentences worth scoring.
///
/// `sets` holds one candidate set per word and `wrong` the positions that
/// failed the vocabulary check, in ascending order.
pub fn enumerate(
    words: &[String],
    sets: &[CandidateSet],
    wrong: &[usize],
    max_sentences: Option<usize>,
) -> Result<Vec<CandidateSentence>> {
    if sets.len() != words.len() {
        return Err(SpellError::internal(format!(
            "{} candidate sets for {} words",
            sets.len(),
            words.len()
        )));
    }
    if wrong.iter().any(|&w| w >= words.len()) {
        return Err(SpellError::internal("wrong position out of range"));
    }

    let mut pool = SentencePool::new(max_sentences);
    match *wrong {
        [] => enumerate_unflagged(words, sets, &mut pool),
        [w] => enumerate_one_flagged(words, sets, w, &mut pool),
        [a, b] => enumerate_two_flagged(words, sets, a, b, &mut pool),
        _ => {
            return Err(SpellError::TooManyUnknownWords {
                words: wrong.iter().map(|&i| words[i].clone()).collect(),
            });
        }
    }

    let sentences = pool.into_sentences();
    if sentences.is_empty() {
        let mut unmatched: Vec<String> = wrong
            .iter()
            .filter(|&&i| sets[i].is_empty())
            .map(|&i| words[i].clone())
            .collect();
        if unmatched.is_empty() {
            unmatched = wrong.iter().map(|&i| words[i].clone()).collect();
        }
        return Err(SpellError::NoCandidate { words: unmatched });
    }
    Ok(sentences)
}

fn enumerate_unflagged(words: &[String], sets: &[CandidateSet], pool: &mut SentencePool) {
    pool.push(words.to_vec());

    let mid = words.len() / 2;
    if mid == 0 {
        for i in 0..words.len() {
            for candidate in sets[i].iter() {
                if !pool.push(replaced(words, i, candidate)) {
                    return;
                }
            }
        }
        return;
    }

    for k in 0..mid {
        for i in mid..words.len() {
            for second in sets[i].iter() {
                let base = replaced(words, i, second);
                for first in sets[k].iter() {
                    if !pool.push(replaced(&base, k, first)) {
                        return;
                    }
                }
            }
        }
    }
}

fn enumerate_one_flagged(
    words: &[String],
    sets: &[CandidateSet],
    w: usize,
    pool: &mut SentencePool,
) {
    let primaries: Vec<Vec<String>> = sets[w]
        .iter()
        .map(|candidate| replaced(words, w, candidate))
        .collect();
    for primary in &primaries {
        if !pool.push(primary.clone()) {
            return;
        }
    }

    for i in (0..words.len()).filter(|&i| i.abs_diff(w) > 1) {
        for primary in &primaries {
            for candidate in sets[i].iter() {
                if !pool.push(replaced(primary, i, candidate)) {
                    return;
                }
            }
        }
    }
}

fn enumerate_two_flagged(
    words: &[String],
    sets: &[CandidateSet],
    a: usize,
    b: usize,
    pool: &mut SentencePool,
) {
    for first in sets[a].iter() {
        let base = replaced(words, a, first);
        for second in sets[b].iter() {
            if !pool.push(replaced(&base, b, second)) {
                return;
            }
        }
    }
}
