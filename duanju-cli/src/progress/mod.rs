//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for multi-file segmentation runs.
///
/// The underlying bar is reference counted; [`advance`] may be called
/// from rayon worker threads.
///
/// [`advance`]: ProgressReporter::advance
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; quiet mode suppresses all output
    pub fn new(quiet: bool, total_files: u64) -> Self {
        if quiet || total_files < 2 {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total_files);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} files {msg}")
                .expect("static template is well-formed")
                .progress_chars("##-"),
        );

        Self { bar: Some(bar) }
    }

    /// Record one completed file
    pub fn advance(&self, filename: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("segmented {filename}"));
            bar.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
