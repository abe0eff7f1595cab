//! Error types for segmentation.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by segmentation and input handling.
#[derive(Error, Debug)]
pub enum Error {
    /// An unmatched closing quote was encountered while error tolerance
    /// was disabled. Carries the offending character, the 1-based line it
    /// was found on, and the sentence text accumulated up to that point.
    #[error("syntax error: unexpected '{character}' on line {line} (after \"{partial}\")")]
    Syntax {
        /// The offending closing-quote character
        character: char,
        /// 1-based line number, counted by consumed newlines
        line: usize,
        /// Sentence text accumulated before the error
        partial: String,
    },

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for segmentation operations.
pub type Result<T> = std::result::Result<T, Error>;
