// file: src/parser/table.rs
// description: reads one delimited profiling export into a cell grid
// reference: https://docs.rs/csv

use crate::error::{AnalysisError, Result};
use crate::models::{Cell, Grid};
use csv::{ReaderBuilder, StringRecord};
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TableLoader {
    delimiter: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Loads every record of `path`; each field becomes one classified cell.
    /// A blank line is kept as an empty row so later rows keep their index.
    pub fn load(&self, path: &Path) -> Result<Grid> {
        let data = fs::read(path).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = self.builder().from_reader(data.as_slice());
        let mut record = StringRecord::new();
        let mut grid = Grid::new();
        let mut offset = 0;

        while reader
            .read_record(&mut record)
            .map_err(|e| AnalysisError::from_csv(path, e))?
        {
            push_blank_rows(&mut grid, &data, offset);
            grid.push_row(record.iter().map(Cell::parse).collect());
            offset = reader.position().byte() as usize;
        }
        push_blank_rows(&mut grid, &data, offset);

        debug!(
            "Loaded {} rows ({} cells) from {}",
            grid.height(),
            grid.cell_count(),
            path.display()
        );
        Ok(grid)
    }

    /// First field of the first record, read without loading the rest.
    pub fn read_name(&self, path: &Path) -> Result<Option<String>> {
        let file = File::open(path).map_err(|source| AnalysisError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = self.builder().from_reader(file);

        match reader.records().next() {
            Some(record) => {
                let record = record.map_err(|e| AnalysisError::from_csv(path, e))?;
                Ok(record.get(0).map(str::to_string))
            }
            None => Ok(None),
        }
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(b'"')
            .has_headers(false)
            .flexible(true);
        builder
    }
}

/// The reader drops blank lines, so they are recovered from the raw bytes
/// between the end of the previous record and the start of the next one.
fn push_blank_rows(grid: &mut Grid, data: &[u8], offset: usize) {
    for _ in 0..blank_lines(data, offset) {
        grid.push_row(Vec::new());
    }
}

/// Counts the line terminators (`\n`, `\r\n` or a lone `\r`) at `offset`.
/// A `\n` completing the `\r\n` of the previous record is not a blank line.
fn blank_lines(data: &[u8], offset: usize) -> usize {
    let mut rest = data.get(offset..).unwrap_or_default();
    if offset > 0 && data[offset - 1] == b'\r' {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }

    let run = rest
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .count();
    let run = &rest[..run];

    run.iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || run.get(i + 1) != Some(&b'\n'))
        .count()
}
