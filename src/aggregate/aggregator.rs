// file: src/aggregate/aggregator.rs
// description: folds per-file grids into cell-wise max and sum tables
// reference: numeric cells accumulate, label cells overwrite (last file wins)

use super::policy::{AggregationPolicy, LabelTransition};
use crate::models::{AggregateGrid, Cell, Grid, LoadedTable};
use tracing::debug;

/// Result of folding a set of files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateSummary {
    pub max: AggregateGrid,
    pub sum: AggregateGrid,
    pub files: usize,
}

impl AggregateSummary {
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }
}

pub struct Aggregator {
    policy: AggregationPolicy,
    max: AggregateGrid,
    sum: AggregateGrid,
    files: usize,
}

impl Aggregator {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self {
            policy,
            max: AggregateGrid::new(),
            sum: AggregateGrid::new(),
            files: 0,
        }
    }

    /// Folds every table in order and returns the finished summary.
    pub fn aggregate<'a, I>(policy: AggregationPolicy, tables: I) -> AggregateSummary
    where
        I: IntoIterator<Item = &'a LoadedTable>,
    {
        let mut aggregator = Self::new(policy);
        for table in tables {
            debug!("Folding {}", table.path.display());
            aggregator.fold(&table.grid);
        }
        aggregator.finish()
    }

    pub fn fold(&mut self, grid: &Grid) {
        self.files += 1;

        for (i, row) in grid.rows().iter().enumerate() {
            self.max.ensure_shape(i, row.len());
            self.sum.ensure_shape(i, row.len());

            for (j, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Number(value) => self.fold_number(i, j, *value),
                    Cell::Label(text) => self.fold_label(i, j, text),
                }
            }
        }
    }

    pub fn finish(self) -> AggregateSummary {
        AggregateSummary {
            max: self.max,
            sum: self.sum,
            files: self.files,
        }
    }

    fn fold_number(&mut self, i: usize, j: usize, value: f64) {
        if self.policy.skip_header_row && i == 0 {
            return;
        }

        let max = self.max.get_mut(i, j);
        match max {
            Cell::Number(current) => {
                if *current < value {
                    *current = value;
                }
            }
            Cell::Label(_) => *max = Cell::Number(value),
        }

        let sum = self.sum.get_mut(i, j);
        match sum {
            Cell::Number(current) => *current += value,
            Cell::Label(_) => {
                if self.policy.label_transition == LabelTransition::Reset {
                    *sum = Cell::Number(value);
                }
            }
        }
    }

    fn fold_label(&mut self, i: usize, j: usize, text: &str) {
        let text = if self.policy.blank_corner && i == 0 && j == 0 {
            ""
        } else {
            text
        };

        *self.max.get_mut(i, j) = Cell::from(text);
        *self.sum.get_mut(i, j) = Cell::from(text);
    }
}
