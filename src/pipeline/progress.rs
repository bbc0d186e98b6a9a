// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks loading metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub files_found: usize,
    pub files_loaded: usize,
    pub rows_loaded: usize,
    pub cells_loaded: usize,
    pub bytes_loaded: u64,
    pub duration: Duration,
    /// Set only when a report was actually written.
    pub output: Option<PathBuf>,
}

impl RunStats {
    pub fn files_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.files_loaded as f64 / secs
    }

    pub fn rows_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.rows_loaded as f64 / secs
    }
}

/// How the per-file bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressDisplay {
    Hidden,
    Plain,
    Colored,
}

impl ProgressDisplay {
    pub fn from_flags(show_progress: bool, colored: bool) -> Self {
        match (show_progress, colored) {
            (false, _) => Self::Hidden,
            (true, false) => Self::Plain,
            (true, true) => Self::Colored,
        }
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: RunStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize, display: ProgressDisplay) -> Self {
        match display {
            ProgressDisplay::Hidden => Self::hidden(total_files),
            ProgressDisplay::Plain => Self::with_color(total_files, false),
            ProgressDisplay::Colored => Self::with_color(total_files, true),
        }
    }

    fn with_color(total_files: usize, colored: bool) -> Self {
        Self::from_bar(create_progress_bar(total_files as u64, colored), total_files)
    }

    /// Tracker that counts but never draws.
    pub fn hidden(total_files: usize) -> Self {
        Self::from_bar(ProgressBar::hidden(), total_files)
    }

    fn from_bar(bar: ProgressBar, total_files: usize) -> Self {
        Self {
            bar,
            stats: RunStats {
                files_found: total_files,
                ..RunStats::default()
            },
            start_time: Instant::now(),
        }
    }

    pub fn start_file(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    pub fn file_loaded(&mut self, rows: usize, cells: usize, bytes: u64) {
        self.stats.files_loaded += 1;
        self.stats.rows_loaded += rows;
        self.stats.cells_loaded += cells;
        self.stats.bytes_loaded += bytes;
        self.bar.inc(1);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> RunStats {
        RunStats {
            duration: self.start_time.elapsed(),
            ..self.stats.clone()
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn bar_template(colored: bool) -> &'static str {
    if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(bar_template(colored)) {
        Ok(style) => bar.set_style(style.progress_chars("=>-")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}
