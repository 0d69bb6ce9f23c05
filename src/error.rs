//! Error types for phrase correction.
//!
//! Every fallible operation in the crate returns [`Result`], whose error is a
//! [`SpellError`]. The correction failures (`TooManyUnknownWords`,
//! `NoCandidate`) are ordinary outcomes of the pipeline and carry the words
//! that caused them so callers can branch on them without string matching.

use std::io;

use thiserror::Error;

/// The error type for correction and resource loading.
#[derive(Error, Debug)]
pub enum SpellError {
    /// The phrase was empty or contained only whitespace.
    #[error("phrase must be non-empty")]
    EmptyPhrase,

    /// More than two words failed the vocabulary check.
    #[error("more than two words are not in the vocabulary: {}", .words.join(", "))]
    TooManyUnknownWords { words: Vec<String> },

    /// A flagged word has no vocabulary word at edit distance one.
    #[error("{} is not one edit away from any vocabulary word", .words.join(" or "))]
    NoCandidate { words: Vec<String> },

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed line in a counts or confusion file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`SpellError`].
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidConfig(msg.into())
    }

    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        SpellError::Parse {
            line,
            message: msg.into(),
        }
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SpellError::Internal(msg.into())
    }

    /// Whether this error is one of the defined correction outcomes rather
    /// than a fault or a loader problem.
    pub fn is_correction_failure(&self) -> bool {
        matches!(
            self,
            SpellError::TooManyUnknownWords { .. } | SpellError::NoCandidate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SpellError::TooManyUnknownWords {
            words: vec!["xq".into(), "zv".into(), "qqq".into()],
        };
        assert_eq!(
            error.to_string(),
            "more than two words are not in the vocabulary: xq, zv, qqq"
        );

        let error = SpellError::NoCandidate {
            words: vec!["xq".into(), "zv".into()],
        };
        assert_eq!(
            error.to_string(),
            "xq or zv is not one edit away from any vocabulary word"
        );

        let error = SpellError::parse(3, "missing count");
        assert_eq!(error.to_string(), "parse error at line 3: missing count");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpellError::from(io_error);

        match error {
            SpellError::Io(_) => {}
            other => panic!("expected I/O error, got {other:?}"),
        }
        assert!(!SpellError::EmptyPhrase.is_correction_failure());
        assert!(SpellError::NoCandidate { words: vec![] }.is_correction_failure());
    }
}
