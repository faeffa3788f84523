//! Progress display for reconstructing one image or a directory of them

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks shred placements per image
///
/// Shows one bar per image for small batches. Past
/// `MAX_INDIVIDUAL_PROGRESS_BARS` images the bars are reused for the most
/// recent files and an overall batch bar is added.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Create the bars for `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(PLACEMENT_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Reset a bar for image `index`, which needs `steps` placements
    pub fn start_file(&self, index: usize, path: &Path, steps: usize) {
        if let Some(bar) = self.bar_for(index) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.reset();
            bar.set_length(steps as u64);
            bar.set_position(0);
            bar.set_message(display_name);
            bar.set_prefix(String::new());
        }
    }

    /// Report that `placed` shreds of image `index` have been attached
    pub fn record_placement(&self, index: usize, placed: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(placed as u64);
        }
    }

    /// Mark image `index` done, showing `summary` after its bar
    pub fn complete_file(&self, index: usize, summary: &str) {
        if let Some(bar) = self.bar_for(index) {
            let length = bar.length().unwrap_or(0);
            bar.set_position(length);
            bar.set_prefix(format!("✓ {summary}"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Images completed so far, when a batch bar is shown
    pub fn batch_position(&self) -> Option<u64> {
        self.batch_bar.as_ref().map(ProgressBar::position)
    }

    /// Hide the bars while `f` runs, so output written by `f` is not
    /// overdrawn
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi_progress.suspend(f)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Images beyond the bar count rotate through the existing bars
    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        if self.file_bars.is_empty() {
            return None;
        }
        self.file_bars.get(index % self.file_bars.len())
    }
}
