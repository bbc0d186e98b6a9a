// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod context;
mod gather;
mod hottest;
mod progress;

pub use context::RunContext;
pub use gather::GatherPipeline;
pub use hottest::HottestPipeline;
pub use progress::{ProgressDisplay, ProgressTracker, RunStats};
