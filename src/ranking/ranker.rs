// file: src/ranking/ranker.rs
// description: per-file metric totals and the descending hottest-method report
// reference: stable sort keeps scan order among equal totals

use crate::error::Result;
use crate::models::{Cell, LoadedTable};
use crate::parser::TableLoader;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct FileSum {
    pub path: PathBuf,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedReport {
    entries: Vec<RankedEntry>,
}

impl RankedReport {
    pub fn new(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    /// Labels each ranked file with the first cell of its first row.
    pub fn build(ranked: &[FileSum], loader: &TableLoader) -> Result<Self> {
        let mut entries = Vec::with_capacity(ranked.len());
        for file in ranked {
            let name = loader.read_name(&file.path)?.unwrap_or_default();
            entries.push(RankedEntry {
                name,
                value: file.total,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct MethodRanker {
    metric_column: usize,
}

impl MethodRanker {
    pub fn new(metric_column: usize) -> Self {
        Self { metric_column }
    }

    pub fn metric_column(&self) -> usize {
        self.metric_column
    }

    /// Sums the metric column of every row, row 0 included. Labels and rows
    /// too short to reach the column are skipped.
    pub fn sum_per_file(&self, tables: &[LoadedTable]) -> Vec<FileSum> {
        tables
            .iter()
            .map(|table| {
                // `sum()` of no values is -0.0; totals start at +0.0
                let total = table
                    .grid
                    .rows()
                    .iter()
                    .filter_map(|row| row.get(self.metric_column).and_then(Cell::as_number))
                    .fold(0.0, |acc, value| acc + value);
                debug!("{}: {}", table.path.display(), total);
                FileSum {
                    path: table.path.clone(),
                    total,
                }
            })
            .collect()
    }

    /// Orders by total, largest first. Equal totals keep their input order.
    pub fn rank(&self, mut sums: Vec<FileSum>) -> Vec<FileSum> {
        sums.sort_by(|a, b| b.total.total_cmp(&a.total));
        sums
    }
}
