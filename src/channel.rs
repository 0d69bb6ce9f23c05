//! Channel model: how likely an observed word is, given a candidate
//! correction, judged by the single edit that separates them.

use crate::config::CorrectorConfig;
use crate::oracle::ConfusionTable;

/// The family of a single edit, named from the typist's point of view
/// relative to the corrected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// The observed word has an extra character.
    Deletion,
    /// The observed word is missing a character.
    Insertion,
    Transposition,
    Substitution,
}

/// The spans an edit replaced: `corrected` was typed as `observed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPair {
    pub kind: EditKind,
    pub observed: String,
    pub corrected: String,
}

/// Classify the edit turning `suggested` into `observed`, or `None` when the
/// words are equal.
///
/// The edit is located at the first differing character, bounded by the
/// shorter word's last index, so an edit at the very end of a word is
/// located at the last shared position. Each family is only tried when the
/// word lengths allow it.
pub fn classify_edit(suggested: &str, observed: &str) -> Option<EditPair> {
    if suggested == observed {
        return None;
    }

    let s: Vec<char> = suggested.chars().collect();
    let o: Vec<char> = observed.chars().collect();
    let shorter = s.len().min(o.len());
    if shorter == 0 {
        return Some(EditPair {
            kind: EditKind::Substitution,
            observed: observed.to_string(),
            corrected: suggested.to_string(),
        });
    }

    let mismatch = (0..shorter).find(|&i| s[i] != o[i]);
    let at_tail = mismatch.is_none();
    let i = mismatch.unwrap_or(shorter - 1);

    let (kind, observed_span, corrected_span) =
        if o.len() == s.len() + 1 && i + 1 < o.len() && (at_tail || s[i] == o[i + 1]) {
            (EditKind::Deletion, span(&o, i, 2), span(&s, i, 1))
        } else if s.len() == o.len() + 1 && i + 1 < s.len() && (at_tail || s[i + 1] == o[i]) {
            (EditKind::Insertion, span(&o, i, 1), span(&s, i, 2))
        } else if s.len() == o.len() && i + 1 < s.len() && s[i + 1] == o[i] && s[i] == o[i + 1] {
            (EditKind::Transposition, span(&o, i, 2), span(&s, i, 2))
        } else {
            (EditKind::Substitution, span(&o, i, 1), span(&s, i, 1))
        };

    Some(EditPair {
        kind,
        observed: observed_span,
        corrected: corrected_span,
    })
}

fn span(chars: &[char], from: usize, len: usize) -> String {
    let end = (from + len).min(chars.len());
    chars[from.min(end)..end].iter().collect()
}

/// Converts confusion counts into likelihoods in `(0, 1]`.
#[derive(Debug, Clone)]
pub struct ChannelModel<C> {
    table: C,
    zero_count_smoothing: f64,
    confusion_scale: f64,
}

impl<C: ConfusionTable> ChannelModel<C> {
    pub fn new(table: C, zero_count_smoothing: f64, confusion_scale: f64) -> Self {
        ChannelModel {
            table,
            zero_count_smoothing,
            confusion_scale,
        }
    }

    pub fn from_config(table: C, config: &CorrectorConfig) -> Self {
        Self::new(table, config.zero_count_smoothing, config.confusion_scale)
    }

    pub fn table(&self) -> &C {
        &self.table
    }

    /// P(observed | suggested). Equal words score `1.0`; an edit never seen
    /// in the confusion table falls back to the smoothing count instead of
    /// zero.
    pub fn likelihood(&self, suggested: &str, observed: &str) -> f64 {
        let Some(edit) = classify_edit(suggested, observed) else {
            return 1.0;
        };

        let count = match self.table.confusion_count(&edit.observed, &edit.corrected) {
            0 => self.zero_count_smoothing,
            n => f64::from(n),
        };
        (count / self.confusion_scale).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ConfusionMatrix;

    fn pair(kind: EditKind, observed: &str, corrected: &str) -> Option<EditPair> {
        Some(EditPair {
            kind,
            observed: observed.to_string(),
            corrected: corrected.to_string(),
        })
    }

    #[test]
    fn test_classify_identical() {
        assert_eq!(classify_edit("home", "home"), None);
    }

    #[test]
    fn test_classify_transposition() {
        assert_eq!(
            classify_edit("the", "hte"),
            pair(EditKind::Transposition, "ht", "th")
        );
        assert_eq!(
            classify_edit("form", "from"),
            pair(EditKind::Transposition, "ro", "or")
        );
    }

    #[test]
    fn test_classify_deletion() {
        // observed carries an extra letter
        assert_eq!(
            classify_edit("home", "hxome"),
            pair(EditKind::Deletion, "xo", "o")
        );
        assert_eq!(
            classify_edit("home", "homes"),
            pair(EditKind::Deletion, "es", "e")
        );
    }

    #[test]
    fn test_classify_insertion() {
        // observed is missing a letter
        assert_eq!(
            classify_edit("home", "hme"),
            pair(EditKind::Insertion, "m", "om")
        );
        assert_eq!(
            classify_edit("homes", "home"),
            pair(EditKind::Insertion, "e", "es")
        );
    }

    #[test]
    fn test_classify_substitution() {
        assert_eq!(
            classify_edit("cat", "cot"),
            pair(EditKind::Substitution, "o", "a")
        );
        assert_eq!(
            classify_edit("a", "i"),
            pair(EditKind::Substitution, "i", "a")
        );
    }

    #[test]
    fn test_classify_empty_word() {
        assert_eq!(
            classify_edit("", "a"),
            pair(EditKind::Substitution, "a", "")
        );
    }

    #[test]
    fn test_likelihood_identity() {
        let model = ChannelModel::new(ConfusionMatrix::new(), 1.0, 920.0);
        for word in ["a", "home", "don't"] {
            assert_eq!(model.likelihood(word, word), 1.0);
        }
    }

    #[test]
    fn test_likelihood_uses_confusion_counts() {
        let mut matrix = ConfusionMatrix::new();
        matrix.insert("ht", "th", 46);
        matrix.insert("o", "a", 92);
        let model = ChannelModel::new(matrix, 1.0, 920.0);

        assert_eq!(model.likelihood("the", "hte"), 0.05);
        assert_eq!(model.likelihood("cat", "cot"), 0.1);
    }

    #[test]
    fn test_likelihood_smooths_zero_counts() {
        let strict = ChannelModel::new(ConfusionMatrix::new(), 1.0, 920.0);
        let average = ChannelModel::new(ConfusionMatrix::new(), 41.0, 920.0);

        let p = strict.likelihood("home", "hme");
        assert!(p > 0.0 && p < 1.0);
        assert_eq!(p, 1.0 / 920.0);
        assert_eq!(average.likelihood("home", "hme"), 41.0 / 920.0);
    }

    #[test]
    fn test_likelihood_is_clamped() {
        let mut matrix = ConfusionMatrix::new();
        matrix.insert("o", "a", 5000);
        let model = ChannelModel::new(matrix, 1.0, 920.0);
        assert_eq!(model.likelihood("cat", "cot"), 1.0);
    }
}
