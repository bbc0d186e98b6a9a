// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{AggregateGrid, Grid, LoadedTable};
