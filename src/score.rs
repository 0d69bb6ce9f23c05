//! Bigram scoring of candidate sentences against the original phrase.

use crate::channel::ChannelModel;
use crate::enumerate::changed_positions;
use crate::oracle::{ConfusionTable, Vocabulary};

/// Scores a candidate by how much more frequent its changed words are in
/// context than the words they replace.
pub struct SentenceScorer<'a, V: ?Sized, C> {
    vocabulary: &'a V,
    channel: &'a ChannelModel<C>,
    channel_exponent: f64,
    sentence_frequency_weight: f64,
}

impl<'a, V, C> SentenceScorer<'a, V, C>
where
    V: Vocabulary + ?Sized,
    C: ConfusionTable,
{
    pub fn new(vocabulary: &'a V, channel: &'a ChannelModel<C>) -> Self {
        SentenceScorer {
            vocabulary,
            channel,
            channel_exponent: 0.0,
            sentence_frequency_weight: 0.0,
        }
    }

    pub fn with_channel_exponent(mut self, exponent: f64) -> Self {
        self.channel_exponent = exponent;
        self
    }

    pub fn with_sentence_frequency_weight(mut self, weight: f64) -> Self {
        self.sentence_frequency_weight = weight;
        self
    }

    /// Sum over changed positions of candidate minus original context
    /// frequency, plus the optional whole-sentence frequency bonus.
    pub fn score(&self, candidate: &[String], original: &[String]) -> f64 {
        let mut total = 0.0;
        for i in changed_positions(candidate, original) {
            let mut proposed = self.context_frequency(candidate, i);
            if self.channel_exponent != 0.0 {
                proposed *= self
                    .channel
                    .likelihood(&candidate[i], &original[i])
                    .powf(self.channel_exponent);
            }
            total += proposed - self.context_frequency(original, i);
        }

        if self.sentence_frequency_weight != 0.0 {
            let bonus: f64 = candidate
                .iter()
                .map(|word| self.vocabulary.smoothed_frequency(word))
                .sum();
            total += self.sentence_frequency_weight * bonus;
        }
        total
    }

    /// Frequency of the word at `i` with its neighbours: the product of the
    /// backward and forward bigrams, whichever one exists at a sentence
    /// boundary, or the unigram for a one-word sentence.
    fn context_frequency(&self, words: &[String], i: usize) -> f64 {
        let word = &words[i];
        let backward = i
            .checked_sub(1)
            .map(|prev| self.bigram_frequency(&words[prev], word));
        let forward = words
            .get(i + 1)
            .map(|next| self.bigram_frequency(word, next));

        match (backward, forward) {
            (Some(b), Some(f)) => b * f,
            (Some(b), None) => b,
            (None, Some(f)) => f,
            (None, None) => self.vocabulary.smoothed_frequency(word),
        }
    }

    fn bigram_frequency(&self, first: &str, second: &str) -> f64 {
        self.vocabulary
            .smoothed_frequency(&format!("{first} {second}"))
    }
}
