// file: src/models/cell.rs
// description: tagged numeric-or-label cell decided once at load time
// reference: internal data structures

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Label(String),
}

impl Cell {
    /// Value used to pad aggregate rows up to a wider width.
    pub const ZERO: Cell = Cell::Number(0.0);

    /// Classifies raw field text. Surrounding whitespace is ignored for the
    /// numeric test only; a label keeps its text verbatim.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Label(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Label(_) => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::ZERO
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Label(text.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Label(text) => f.write_str(text),
        }
    }
}
