// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod utils;

pub use aggregate::{AggregateSummary, AggregationPolicy, Aggregator, LabelTransition};
pub use config::{Config, GatherConfig, HottestConfig};
pub use discovery::{FileScanner, ScannedFile};
pub use error::{AnalysisError, Result};
pub use exporter::CsvExporter;
pub use models::{AggregateGrid, Cell, Grid, LoadedTable};
pub use parser::TableLoader;
pub use pipeline::{
    GatherPipeline, HottestPipeline, ProgressDisplay, ProgressTracker, RunContext, RunStats,
};
pub use ranking::{FileSum, MethodRanker, RankedEntry, RankedReport};
pub use utils::Validator;
