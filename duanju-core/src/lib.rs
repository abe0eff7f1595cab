//! Quote-aware sentence segmentation for mixed Chinese and English text.
//!
//! This crate segments a block of text into an ordered sequence of
//! sentences. A five-state automaton classifies each character, tracks
//! quotation nesting with a LIFO stack and accumulates sentence text, so
//! terminal punctuation inside a quoted span (`“一个？测试”`) does not end
//! the outer sentence. An unmatched closing quote is the one malformed
//! input: it either fails the run with [`Error::Syntax`] or, with error
//! tolerance enabled, is absorbed as ordinary text.
//!
//! # Example
//!
//! ```rust
//! use duanju_core::SentenceSegmenter;
//!
//! let segmenter = SentenceSegmenter::new();
//! let output = segmenter.segment_text("你好。这是“一个？测试”。").unwrap();
//! assert_eq!(output.texts(), ["你好。", "这是“一个？测试”。"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod output;
mod segmenter;

pub use config::{Config, ConfigBuilder};
pub use domain::{QuoteStack, State, Symbol};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Metadata, Output, Sentence};
pub use segmenter::{segment_file, segment_text, SentenceSegmenter};
