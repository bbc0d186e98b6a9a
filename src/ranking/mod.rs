// file: src/ranking/mod.rs
// description: metric ranking module exports
// reference: internal module structure

pub mod ranker;

pub use ranker::{FileSum, MethodRanker, RankedEntry, RankedReport};
