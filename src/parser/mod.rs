// file: src/parser/mod.rs
// description: delimited table loading module exports
// reference: internal module structure

pub mod table;

pub use table::TableLoader;
