// file: src/pipeline/context.rs
// description: per-run state shared by the gather and hottest pipelines
// reference: loads each file fully and closes it before the next one

use super::progress::{ProgressDisplay, ProgressTracker};
use crate::discovery::{FileScanner, ScannedFile};
use crate::error::{AnalysisError, Result};
use crate::models::LoadedTable;
use crate::parser::TableLoader;
use std::path::Path;
use tracing::{debug, info};

/// Everything one run reads: the tables in scan order plus progress.
pub struct RunContext {
    pub tables: Vec<LoadedTable>,
    pub progress: ProgressTracker,
}

impl RunContext {
    /// Scans `folder` and loads every matching file. Fails with
    /// [`AnalysisError::NoInput`] when nothing matches.
    pub fn collect(
        folder: &Path,
        scanner: &FileScanner,
        loader: &TableLoader,
        display: ProgressDisplay,
    ) -> Result<Self> {
        let files = scanner.scan_directory(folder)?;
        if files.is_empty() {
            return Err(AnalysisError::NoInput {
                folder: folder.to_path_buf(),
                suffix: scanner.suffix().to_string(),
            });
        }

        let progress = ProgressTracker::new(files.len(), display);

        info!("Collecting data from folder {}", folder.display());
        let mut context = Self {
            tables: Vec::with_capacity(files.len()),
            progress,
        };
        for file in &files {
            context.load(file, loader)?;
        }
        Ok(context)
    }

    fn load(&mut self, file: &ScannedFile, loader: &TableLoader) -> Result<()> {
        self.progress.start_file(&file.file_name);

        let grid = loader.load(&file.path)?;
        debug!("{}: {} rows", file.file_name, grid.height());

        self.progress
            .file_loaded(grid.height(), grid.cell_count(), file.size);
        self.tables.push(LoadedTable::new(file.path.clone(), grid));
        Ok(())
    }
}
