//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use duanju_core::{Config, SentenceSegmenter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat unmatched closing quotes as ordinary text
    #[arg(short = 't', long)]
    pub error_tolerant: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Resolve a format name from the configuration file
    fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => {
                Err(CliError::ConfigError(format!("unknown output format: {other}")).into())
            }
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {self:?}");

        let defaults = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&defaults.output.default_format)?,
        };
        let tolerant = self.error_tolerant || defaults.segmentation.error_tolerant;

        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s)", files.len());

        let segmenter =
            SentenceSegmenter::with_config(Config::builder().error_tolerant(tolerant).build());
        let progress = ProgressReporter::new(self.quiet, files.len() as u64);

        // Independent runs share no state; collect preserves input order.
        let outputs: Vec<duanju_core::Output> = files
            .par_iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                let output = segmenter.segment_text(&text).map_err(|e| {
                    CliError::SegmentationError(format!("{}: {e}", path.display()))
                })?;
                progress.advance(&path.display().to_string());
                Ok(output)
            })
            .collect::<Result<Vec<_>>>()?;

        progress.finish();

        let mut formatter = self.create_formatter(format, defaults.output.pretty_json)?;
        for output in &outputs {
            log::debug!(
                "{} sentences in {} ms",
                output.metadata.sentence_count,
                output.metadata.processing_time_ms
            );
            for sentence in &output.sentences {
                formatter.format_sentence(sentence.text())?;
            }
        }
        formatter.finish()?;

        Ok(())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
