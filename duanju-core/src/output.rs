//! Output types for segmentation results.

/// One emitted unit of segmented text. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    text: String,
}

impl Sentence {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    /// The sentence text, including its own terminator when it had one.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the sentence and returns the owned text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of Unicode scalar values in the sentence.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Complete segmentation output: sentences in input order plus runtime
/// statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Emitted sentences, preserving input order
    pub sentences: Vec<Sentence>,
    /// Statistics about the run
    pub metadata: Metadata,
}

impl Output {
    /// Borrowed view of the sentence texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(Sentence::text).collect()
    }
}

/// Runtime statistics for one segmentation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes of input text
    pub total_bytes: usize,
    /// Total characters of input text
    pub total_chars: usize,
    /// Number of sentences emitted
    pub sentence_count: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}
