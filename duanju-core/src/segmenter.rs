//! Main entry point for sentence segmentation.

use std::time::Instant;

use crate::config::Config;
use crate::domain::scanner::Scanner;
use crate::error::Result;
use crate::input::Input;
use crate::output::{Metadata, Output};

/// Quote-aware sentence segmenter.
///
/// Holds only immutable configuration; every [`segment`](Self::segment)
/// call runs on fresh scan state, so one segmenter may be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    config: Config,
}

impl SentenceSegmenter {
    /// Creates a segmenter with default (strict) configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a segmenter with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Creates a segmenter that absorbs unmatched closing quotes instead
    /// of failing.
    pub fn error_tolerant() -> Self {
        Self::with_config(Config::builder().error_tolerant(true).build())
    }

    /// Segments the input into an ordered sequence of sentences.
    pub fn segment(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.read_text()?;
        let sentences = Scanner::new(self.config.error_tolerant).scan(&text)?;
        Ok(Output {
            metadata: Metadata {
                total_bytes: text.len(),
                total_chars: text.chars().count(),
                sentence_count: sentences.len(),
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
            sentences,
        })
    }

    /// Convenience wrapper for direct text input.
    pub fn segment_text(&self, text: &str) -> Result<Output> {
        self.segment(Input::from_text(text))
    }

    /// The segmenter's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Segments text with the default configuration.
pub fn segment_text(text: &str) -> Result<Output> {
    SentenceSegmenter::new().segment(Input::from_text(text))
}

/// Segments a file's contents with the default configuration.
pub fn segment_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    SentenceSegmenter::new().segment(Input::from_file(path.as_ref().to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_reflects_input() {
        let output = segment_text("你好。世界。").unwrap();
        assert_eq!(output.metadata.sentence_count, 2);
        assert_eq!(output.metadata.total_chars, 6);
        assert_eq!(output.metadata.total_bytes, "你好。世界。".len());
    }

    #[test]
    fn segmenter_is_reusable_across_inputs() {
        let segmenter = SentenceSegmenter::new();
        let first = segmenter.segment_text("他说“你好？”。").unwrap();
        assert_eq!(first.texts(), ["他说“你好？”。"]);

        // A second run starts from a fresh quote stack; nothing leaks.
        let second = segmenter.segment_text("再见。").unwrap();
        assert_eq!(second.texts(), ["再见。"]);
    }

    #[test]
    fn strict_and_tolerant_disagree_on_stray_close() {
        let strict = SentenceSegmenter::new();
        assert!(strict.segment_text("错”误。").is_err());

        let tolerant = SentenceSegmenter::error_tolerant();
        let output = tolerant.segment_text("错”误。").unwrap();
        assert_eq!(output.texts(), ["错”误。"]);
    }
}
