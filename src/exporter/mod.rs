// file: src/exporter/mod.rs
// description: report export module exports
// reference: internal module structure

pub mod delimited;

pub use delimited::{CsvExporter, MAX_MARKER, SUM_MARKER};
