//! In-memory vocabulary, n-gram counts and confusion matrix.

use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::oracle::{ConfusionTable, Vocabulary};

/// Dictionary and n-gram counts with add-k smoothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    vocabulary: HashSet<String>,
    ngram_counts: HashMap<String, u64>,
    smoothing: f64,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Corpus {
    /// Create an empty corpus whose smoothed counts are `count + smoothing`.
    pub fn new(smoothing: f64) -> Self {
        Corpus {
            vocabulary: HashSet::new(),
            ngram_counts: HashMap::new(),
            smoothing,
        }
    }

    pub fn add_word(&mut self, word: &str) {
        self.vocabulary.insert(word.to_lowercase());
    }

    /// Add `count` occurrences of a one- or two-word n-gram. Unigrams also
    /// become vocabulary words.
    pub fn add_ngram(&mut self, ngram: &str, count: u64) {
        let key = normalize_ngram(ngram);
        if key.is_empty() {
            return;
        }
        if !key.contains(' ') {
            self.vocabulary.insert(key.clone());
        }
        *self.ngram_counts.entry(key).or_insert(0) += count;
    }

    /// Raw count of an n-gram, zero when unseen.
    pub fn count(&self, ngram: &str) -> u64 {
        self.ngram_counts
            .get(&normalize_ngram(ngram))
            .copied()
            .unwrap_or(0)
    }

    pub fn word_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn ngram_count(&self) -> usize {
        self.ngram_counts.len()
    }

    /// Read `ngram count` lines. Blank lines and `#` comments are skipped.
    pub fn from_counts_reader<R: BufRead>(reader: R, smoothing: f64) -> Result<Self> {
        let mut corpus = Corpus::new(smoothing);
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
            let count = tokens
                .pop()
                .and_then(|raw| raw.parse::<u64>().ok())
                .ok_or_else(|| SpellError::parse(idx + 1, format!("missing count in {trimmed:?}")))?;
            if tokens.is_empty() || tokens.len() > 2 {
                return Err(SpellError::parse(
                    idx + 1,
                    format!("expected one or two words, got {}", tokens.len()),
                ));
            }
            corpus.add_ngram(&tokens.join(" "), count);
        }
        Ok(corpus)
    }

    pub fn from_counts_file<P: AsRef<Path>>(path: P, smoothing: f64) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let corpus = Self::from_counts_reader(BufReader::new(file), smoothing)?;
        info!(
            "loaded {} n-grams and {} words from {}",
            corpus.ngram_count(),
            corpus.word_count(),
            path.as_ref().display()
        );
        Ok(corpus)
    }

    /// Add every non-empty line of a word list to the vocabulary.
    pub fn add_word_list_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            self.add_word(word);
        }
        Ok(())
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Vocabulary for Corpus {
    fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    fn smoothed_frequency(&self, ngram: &str) -> f64 {
        self.count(ngram) as f64 + self.smoothing
    }
}

fn normalize_ngram(ngram: &str) -> String {
    ngram
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letter confusion counts keyed by `(observed, corrected)` spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: HashMap<String, u32>, // "observed|corrected" -> count
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, observed: &str, corrected: &str, count: u32) {
        self.counts.insert(confusion_key(observed, corrected), count);
    }

    /// Largest count in the table; a sensible lower bound for the
    /// likelihood scale.
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Read `observed|corrected<TAB>count` lines. Spans may contain spaces,
    /// so the count is split off the end of the line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut matrix = ConfusionMatrix::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (pair, raw_count) = line
                .rsplit_once('\t')
                .or_else(|| line.rsplit_once(' '))
                .ok_or_else(|| SpellError::parse(idx + 1, "missing count"))?;
            let count = raw_count
                .trim()
                .parse::<u32>()
                .map_err(|e| SpellError::parse(idx + 1, format!("bad count {raw_count:?}: {e}")))?;
            let (observed, corrected) = pair
                .split_once('|')
                .ok_or_else(|| SpellError::parse(idx + 1, format!("expected a|b, got {pair:?}")))?;
            matrix.insert(observed, corrected, count);
        }
        Ok(matrix)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let matrix = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} confusion entries (max count {}) from {}",
            matrix.len(),
            matrix.max_count(),
            path.as_ref().display()
        );
        Ok(matrix)
    }
}

impl ConfusionTable for ConfusionMatrix {
    fn confusion_count(&self, observed: &str, corrected: &str) -> u32 {
        self.counts
            .get(&confusion_key(observed, corrected))
            .copied()
            .unwrap_or(0)
    }
}

fn confusion_key(observed: &str, corrected: &str) -> String {
    format!("{observed}|{corrected}")
}
