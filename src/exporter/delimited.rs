// file: src/exporter/delimited.rs
// description: csv export for the max/sum summary and the hottest-method ranking

use crate::aggregate::AggregateSummary;
use crate::error::{AnalysisError, Result};
use crate::models::{AggregateGrid, Cell};
use crate::ranking::RankedReport;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const MAX_MARKER: &str = "Max";
pub const SUM_MARKER: &str = "Sum";

/// Both reports use `,` whatever the input delimiter was.
const DELIMITER: u8 = b',';

#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `Max`, the max rows, `Sum`, the sum rows. Returns `false`
    /// without touching `path` when no file was aggregated.
    pub fn write_summary(&self, path: &Path, summary: &AggregateSummary) -> Result<bool> {
        if summary.is_empty() {
            return Ok(false);
        }

        let mut writer = self.create(path)?;
        write_row(&mut writer, path, [MAX_MARKER])?;
        write_grid(&mut writer, path, &summary.max)?;
        write_row(&mut writer, path, [SUM_MARKER])?;
        write_grid(&mut writer, path, &summary.sum)?;
        flush(writer, path)?;

        info!(
            "Wrote summary of {} files to {}",
            summary.files,
            path.display()
        );
        Ok(true)
    }

    /// Writes one `name,value` row per entry. Returns `false` without
    /// touching `path` when the report is empty.
    pub fn write_ranking(&self, path: &Path, report: &RankedReport) -> Result<bool> {
        if report.is_empty() {
            return Ok(false);
        }

        let mut writer = self.create(path)?;
        for entry in report.entries() {
            let value = Cell::Number(entry.value).to_string();
            write_row(&mut writer, path, [entry.name.as_str(), value.as_str()])?;
        }
        flush(writer, path)?;

        info!("Wrote {} ranked methods to {}", report.len(), path.display());
        Ok(true)
    }

    fn create(&self, path: &Path) -> Result<Writer<File>> {
        let file = File::create(path).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(file))
    }
}

fn write_grid(writer: &mut Writer<File>, path: &Path, grid: &AggregateGrid) -> Result<()> {
    for row in grid.rows() {
        if row.is_empty() {
            write_blank_line(writer, path)?;
        } else {
            write_row(writer, path, row.iter().map(Cell::to_string))?;
        }
    }
    Ok(())
}

/// A zero-field record would come out as `""`; an empty row is a bare
/// terminator instead.
fn write_blank_line(writer: &mut Writer<File>, path: &Path) -> Result<()> {
    let io_error = |source: std::io::Error| AnalysisError::FileOperation {
        path: path.to_path_buf(),
        source,
    };

    writer.flush().map_err(io_error)?;
    let mut file = writer.get_ref();
    file.write_all(b"\n").map_err(io_error)
}

fn write_row<I, T>(writer: &mut Writer<File>, path: &Path, row: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer
        .write_record(row)
        .map_err(|e| AnalysisError::from_csv(path, e))
}

fn flush(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| AnalysisError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
