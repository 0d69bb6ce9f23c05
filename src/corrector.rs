//! The correction pipeline.
//!
//! Tokenize, flag unknown words, build a candidate set per word, enumerate
//! whole-sentence rewrites, score them against the original and keep the
//! best one.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error};
use rayon::prelude::*;

use crate::candidates::{self, CandidateSet};
use crate::channel::ChannelModel;
use crate::config::CorrectorConfig;
use crate::enumerate::{self, CandidateSentence, MAX_UNKNOWN_WORDS};
use crate::error::{Result, SpellError};
use crate::oracle::{ConfusionTable, Vocabulary};
use crate::rank;
use crate::score::SentenceScorer;

/// Returned by [`SpellCorrector::correct_phrase`] when more than two words
/// are unknown.
pub const TOO_MANY_UNKNOWN_WORDS: &str =
    "ERROR: more than two words are not in the vocabulary";

/// Returned by [`SpellCorrector::correct_phrase`] on an unexpected fault.
pub const FALLBACK: &str = "ERROR: no corrected sentence could be produced";

/// Outcome of a successful correction.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub score: f64,
    /// Word positions that differ from the original.
    pub changed_positions: Vec<usize>,
    /// Number of distinct sentences that were scored.
    pub candidates_considered: usize,
}

impl Correction {
    pub fn is_changed(&self) -> bool {
        !self.changed_positions.is_empty()
    }
}

/// Noisy-channel sentence corrector over a shared vocabulary and confusion
/// table.
#[derive(Debug, Clone)]
pub struct SpellCorrector<V, C> {
    vocabulary: V,
    channel: ChannelModel<C>,
    config: CorrectorConfig,
}

impl<V: Vocabulary, C: ConfusionTable> SpellCorrector<V, C> {
    pub fn new(vocabulary: V, confusion: C) -> Self {
        let config = CorrectorConfig::default();
        SpellCorrector {
            channel: ChannelModel::from_config(confusion, &config),
            vocabulary,
            config,
        }
    }

    pub fn with_config(vocabulary: V, confusion: C, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellCorrector {
            channel: ChannelModel::from_config(confusion, &config),
            vocabulary,
            config,
        })
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    /// Vocabulary words one edit away from `word`.
    pub fn candidate_words(&self, word: &str) -> HashSet<String> {
        candidates::candidate_words(&self.vocabulary, word)
    }

    /// P(observed | suggested) under the channel model.
    pub fn edit_likelihood(&self, suggested: &str, observed: &str) -> f64 {
        self.channel.likelihood(suggested, observed)
    }

    /// Correct `phrase`, reporting failures as typed errors.
    pub fn correct(&self, phrase: &str) -> Result<Correction> {
        let words: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Err(SpellError::EmptyPhrase);
        }

        let wrong = enumerate::wrong_positions(&self.vocabulary, &words);
        debug!("unknown word positions in {phrase:?}: {wrong:?}");
        if wrong.len() > MAX_UNKNOWN_WORDS {
            return Err(SpellError::TooManyUnknownWords {
                words: wrong.iter().map(|&i| words[i].clone()).collect(),
            });
        }

        let sets = self.candidate_sets(&words, &wrong);
        if self.config.trace {
            trace_matrix(phrase, &sets);
        }

        let sentences = enumerate::enumerate(&words, &sets, &wrong, self.config.max_sentences)?;
        let candidates_considered = sentences.len();
        debug!("scoring {candidates_considered} candidate sentences");

        let scorer = SentenceScorer::new(&self.vocabulary, &self.channel)
            .with_channel_exponent(self.config.channel_exponent)
            .with_sentence_frequency_weight(self.config.sentence_frequency_weight);
        let scored: Vec<CandidateSentence> = sentences
            .into_par_iter()
            .map(|mut sentence| {
                sentence.score = scorer.score(&sentence.words, &words);
                sentence
            })
            .collect();

        let ranked = rank::rank(scored, &words);
        if self.config.trace {
            for sentence in ranked.iter().take(5) {
                debug!("{:>12.3} | {}", sentence.score, sentence.text());
            }
        }

        let best = ranked
            .into_iter()
            .next()
            .ok_or_else(|| SpellError::internal("ranking produced no sentence"))?;
        Ok(Correction {
            original: phrase.to_string(),
            corrected: best.text().trim().to_string(),
            score: best.score,
            changed_positions: best.changed_positions(&words),
            candidates_considered,
        })
    }

    /// Correct `phrase`, always answering with a string unless the phrase is
    /// empty. Correction failures and internal faults become the sentinel
    /// messages of this module.
    pub fn correct_phrase(&self, phrase: &str) -> Result<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.correct(phrase))) {
            Ok(Ok(correction)) => Ok(correction.corrected),
            Ok(Err(SpellError::EmptyPhrase)) => Err(SpellError::EmptyPhrase),
            Ok(Err(SpellError::TooManyUnknownWords { words })) => {
                debug!("too many unknown words: {words:?}");
                Ok(TOO_MANY_UNKNOWN_WORDS.to_string())
            }
            Ok(Err(SpellError::NoCandidate { words })) => Ok(format!(
                "ERROR: {} is not one edit away from any vocabulary word",
                words.join(" or ")
            )),
            Ok(Err(e)) => {
                error!("correction of {phrase:?} failed: {e}");
                Ok(FALLBACK.to_string())
            }
            Err(_) => {
                error!("correction of {phrase:?} panicked");
                Ok(FALLBACK.to_string())
            }
        }
    }

    /// Correct many phrases in parallel, preserving input order.
    pub fn correct_phrases<S: AsRef<str> + Sync>(&self, phrases: &[S]) -> Vec<Result<Correction>> {
        phrases
            .par_iter()
            .map(|phrase| self.correct(phrase.as_ref()))
            .collect()
    }

    fn candidate_sets(&self, words: &[String], wrong: &[usize]) -> Vec<CandidateSet> {
        let cap = self.config.max_candidates_per_word;
        let mut sets: Vec<CandidateSet> = words
            .par_iter()
            .enumerate()
            .map(|(i, word)| {
                let known = !wrong.contains(&i);
                CandidateSet::build(
                    word,
                    known,
                    self.candidate_words(word),
                    |candidate| self.channel.likelihood(candidate, word),
                    cap,
                )
            })
            .collect();
        enumerate::lock_neighbours(&mut sets, words, wrong);
        sets
    }
}

fn trace_matrix(phrase: &str, sets: &[CandidateSet]) {
    debug!("{phrase}");
    for set in sets {
        let marker = if set.is_locked() { "locked" } else { "" };
        debug!("  {:<6} {}", marker, set.words().join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{ConfusionMatrix, Corpus};

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new(1.0);
        for word in [
            "at", "a", "the", "he", "home", "hoe", "me", "locations", "were", "wore", "found",
            "fund", "where",
        ] {
            corpus.add_word(word);
        }
        corpus.add_ngram("at the", 30);
        corpus.add_ngram("the home", 49);
        corpus.add_ngram("home locations", 9);
        corpus.add_ngram("locations were", 5);
        corpus.add_ngram("were found", 8);
        corpus
    }

    fn corrector() -> SpellCorrector<Corpus, ConfusionMatrix> {
        SpellCorrector::new(corpus(), ConfusionMatrix::new())
    }

    #[test]
    fn test_corrects_single_unknown_word() {
        let correction = corrector()
            .correct("at the hme locations were found")
            .unwrap();
        assert_eq!(correction.corrected, "at the home locations were found");
        assert_eq!(correction.changed_positions, vec![2]);
        assert!(correction.is_changed());
        assert!(correction.score > 0.0);
    }

    #[test]
    fn test_correct_phrase_string_contract() {
        let corrector = corrector();
        assert_eq!(
            corrector
                .correct_phrase("at the hme locations were found")
                .unwrap(),
            "at the home locations were found"
        );
        assert!(matches!(
            corrector.correct_phrase(""),
            Err(SpellError::EmptyPhrase)
        ));
        assert!(matches!(
            corrector.correct_phrase("   "),
            Err(SpellError::EmptyPhrase)
        ));
    }

    #[test]
    fn test_too_many_unknown_words() {
        let corrector = corrector();
        assert_eq!(
            corrector.correct_phrase("xq the zv qqq found").unwrap(),
            TOO_MANY_UNKNOWN_WORDS
        );
        match corrector.correct("xq the zv qqq found") {
            Err(SpellError::TooManyUnknownWords { words }) => {
                assert_eq!(words, ["xq", "zv", "qqq"]);
            }
            other => panic!("expected too many unknown words, got {other:?}"),
        }
    }

    #[test]
    fn test_no_candidate_names_word() {
        let corrector = corrector();
        assert_eq!(
            corrector.correct_phrase("the qqqqqq").unwrap(),
            "ERROR: qqqqqq is not one edit away from any vocabulary word"
        );
    }

    #[test]
    fn test_correct_phrase_is_idempotent_on_clean_input() {
        let corrector = corrector();
        let phrase = "at the home locations were found";
        let correction = corrector.correct(phrase).unwrap();
        assert_eq!(correction.corrected, phrase);
        assert!(!correction.is_changed());
    }

    #[test]
    fn test_two_unknown_words() {
        let correction = corrector()
            .correct("at the hme locations wer found")
            .unwrap();
        assert_eq!(correction.corrected, "at the home locations were found");
        assert_eq!(correction.changed_positions, vec![2, 4]);
    }

    #[test]
    fn test_candidate_words_and_likelihood() {
        let corrector = corrector();
        let candidates = corrector.candidate_words("hme");
        assert!(candidates.contains("home"));
        assert!(candidates.contains("hoe"));
        assert!(candidates.contains("he"));
        assert!(candidates.contains("me"));
        assert!(!candidates.contains("hme"));

        assert_eq!(corrector.edit_likelihood("home", "home"), 1.0);
        assert_eq!(corrector.edit_likelihood("home", "hme"), 1.0 / 920.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CorrectorConfig {
            confusion_scale: -1.0,
            ..Default::default()
        };
        assert!(SpellCorrector::with_config(corpus(), ConfusionMatrix::new(), config).is_err());
    }

    #[test]
    fn test_batch_preserves_order() {
        let corrector = corrector();
        let results = corrector.correct_phrases(&["the hme", "", "at the home"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().corrected, "the home");
        assert!(matches!(results[1], Err(SpellError::EmptyPhrase)));
        assert_eq!(results[2].as_ref().unwrap().corrected, "at the home");
    }
}
