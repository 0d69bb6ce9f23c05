//! Read-only language resources consulted by the corrector.
//!
//! The corrector never owns or mutates these; anything implementing the two
//! traits can back it, from the in-memory [`crate::corpus`] tables to a
//! memory-mapped n-gram store.

use std::collections::HashSet;
use std::sync::Arc;

/// Dictionary membership plus smoothed n-gram frequencies.
pub trait Vocabulary: Send + Sync {
    /// Whether `word` is a dictionary word.
    fn contains(&self, word: &str) -> bool;

    /// Keep only the dictionary words of `words`.
    fn retain_known(&self, words: HashSet<String>) -> HashSet<String> {
        words.into_iter().filter(|w| self.contains(w)).collect()
    }

    /// Smoothed count of a one- or two-word key (words joined by one space).
    /// Never zero for a smoothed table.
    fn smoothed_frequency(&self, ngram: &str) -> f64;
}

/// Counts of how often `corrected` was mistyped as `observed`.
pub trait ConfusionTable: Send + Sync {
    fn confusion_count(&self, observed: &str, corrected: &str) -> u32;
}

impl<T: Vocabulary + ?Sized> Vocabulary for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn retain_known(&self, words: HashSet<String>) -> HashSet<String> {
        (**self).retain_known(words)
    }

    fn smoothed_frequency(&self, ngram: &str) -> f64 {
        (**self).smoothed_frequency(ngram)
    }
}

impl<T: Vocabulary + ?Sized> Vocabulary for Arc<T> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn retain_known(&self, words: HashSet<String>) -> HashSet<String> {
        (**self).retain_known(words)
    }

    fn smoothed_frequency(&self, ngram: &str) -> f64 {
        (**self).smoothed_frequency(ngram)
    }
}

impl<T: ConfusionTable + ?Sized> ConfusionTable for &T {
    fn confusion_count(&self, observed: &str, corrected: &str) -> u32 {
        (**self).confusion_count(observed, corrected)
    }
}

impl<T: ConfusionTable + ?Sized> ConfusionTable for Arc<T> {
    fn confusion_count(&self, observed: &str, corrected: &str) -> u32 {
        (**self).confusion_count(observed, corrected)
    }
}
