// file: src/aggregate/mod.rs
// description: max/sum aggregation module exports
// reference: internal module structure

pub mod aggregator;
pub mod policy;

pub use aggregator::{AggregateSummary, Aggregator};
pub use policy::{AggregationPolicy, LabelTransition};
