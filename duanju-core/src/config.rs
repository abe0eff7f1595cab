//! Segmentation configuration.

/// Configuration for a [`SentenceSegmenter`](crate::SentenceSegmenter).
///
/// Carried by value into each segmenter; there is no shared mutable
/// configuration state between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) error_tolerant: bool,
}

impl Config {
    /// Creates a configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether unmatched closing quotes are absorbed as ordinary text.
    pub fn error_tolerant(&self) -> bool {
        self.error_tolerant
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    error_tolerant: bool,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat unmatched closing quotes as ordinary sentence content instead
    /// of failing with [`Error::Syntax`](crate::Error::Syntax).
    pub fn error_tolerant(mut self, tolerant: bool) -> Self {
        self.error_tolerant = tolerant;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            error_tolerant: self.error_tolerant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert!(!Config::default().error_tolerant());
    }

    #[test]
    fn builder_sets_tolerance() {
        let config = Config::builder().error_tolerant(true).build();
        assert!(config.error_tolerant());
    }
}
