//! Edit-distance-1 candidate generation.

use std::collections::HashSet;
use std::iter;

use crate::oracle::Vocabulary;

/// Symbols that may be inserted or substituted.
pub const ALPHABET: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '\'',
];

/// Every string one insertion, deletion, substitution or adjacent
/// transposition away from `word`. The word itself is never included.
pub fn single_edits(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::with_capacity((chars.len() + 1) * ALPHABET.len() * 2);

    for idx in 0..=chars.len() {
        let (head, tail) = chars.split_at(idx);

        for letter in &ALPHABET {
            edits.insert(head.iter().chain(iter::once(letter)).chain(tail).collect());
        }

        let Some((first, rest)) = tail.split_first() else {
            continue;
        };

        edits.insert(head.iter().chain(rest).collect());

        for letter in ALPHABET.iter().filter(|&letter| letter != first) {
            edits.insert(head.iter().chain(iter::once(letter)).chain(rest).collect());
        }

        if let Some((second, rest)) = rest.split_first() {
            if second != first {
                edits.insert(head.iter().chain([second, first]).chain(rest).collect());
            }
        }
    }

    edits.remove(word);
    edits
}

/// Vocabulary words exactly one edit away from `word`.
pub fn candidate_words<V: Vocabulary + ?Sized>(vocabulary: &V, word: &str) -> HashSet<String> {
    vocabulary.retain_known(single_edits(word))
}

/// The words that may stand at one sentence position, most plausible first.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    words: Vec<String>,
    locked: bool,
}

impl CandidateSet {
    /// Assemble the set for `original`. A known word leads its own set; an
    /// unknown word is never a candidate for itself. Neighbours are ordered
    /// by `likelihood` (descending, ties lexical) and cut to `cap`.
    pub fn build<F>(
        original: &str,
        known: bool,
        neighbours: HashSet<String>,
        likelihood: F,
        cap: Option<usize>,
    ) -> Self
    where
        F: Fn(&str) -> f64,
    {
        let mut ranked: Vec<(f64, String)> = neighbours
            .into_iter()
            .filter(|w| w != original)
            .map(|w| (likelihood(&w), w))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        if let Some(cap) = cap {
            ranked.truncate(cap);
        }

        let mut words = Vec::with_capacity(ranked.len() + 1);
        if known {
            words.push(original.to_string());
        }
        words.extend(ranked.into_iter().map(|(_, w)| w));

        CandidateSet {
            words,
            locked: false,
        }
    }

    /// A set holding only `word`.
    pub fn locked(word: &str) -> Self {
        CandidateSet {
            words: vec![word.to_string()],
            locked: true,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
