//! Noisy-channel spelling correction for short sentences.
//!
//! A phrase may contain up to two misspelled words. Each word is expanded to
//! the vocabulary words one edit away, whole-sentence rewrites are
//! enumerated, and the rewrite whose changed words fit their neighbours best
//! according to bigram counts wins.
//!
//! ```
//! use phrase_corrector::{ConfusionMatrix, Corpus, SpellCorrector};
//!
//! let mut corpus = Corpus::new(1.0);
//! for word in ["at", "the", "home", "he", "locations"] {
//!     corpus.add_word(word);
//! }
//! corpus.add_ngram("the home", 40);
//! corpus.add_ngram("home locations", 7);
//!
//! let corrector = SpellCorrector::new(corpus, ConfusionMatrix::new());
//! let corrected = corrector.correct_phrase("at the hme locations").unwrap();
//! assert_eq!(corrected, "at the home locations");
//! ```

pub mod candidates;
pub mod channel;
pub mod config;
pub mod corpus;
pub mod corrector;
pub mod enumerate;
pub mod error;
pub mod oracle;
pub mod rank;
pub mod score;

pub use candidates::{CandidateSet, candidate_words, single_edits};
pub use channel::{ChannelModel, EditKind, EditPair, classify_edit};
pub use config::CorrectorConfig;
pub use corpus::{ConfusionMatrix, Corpus};
pub use corrector::{Correction, FALLBACK, SpellCorrector, TOO_MANY_UNKNOWN_WORDS};
pub use enumerate::CandidateSentence;
pub use error::{Result, SpellError};
pub use oracle::{ConfusionTable, Vocabulary};
