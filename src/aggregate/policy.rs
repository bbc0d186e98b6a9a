// file: src/aggregate/policy.rs
// description: rules that distinguish the gathering fold from the uniform fold
// reference: internal configuration types

use serde::{Deserialize, Serialize};

/// What happens to a sum cell that holds a label when a number arrives at
/// the same position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTransition {
    /// The label stays and the number is not counted.
    #[default]
    Keep,
    /// The label is replaced and the sum restarts from the number.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPolicy {
    /// Row 0 is a header: its numbers are never accumulated.
    pub skip_header_row: bool,
    /// A label at (0, 0) is written as the empty string.
    pub blank_corner: bool,
    pub label_transition: LabelTransition,
}

impl AggregationPolicy {
    /// Fold used for `.hash.csv` summaries.
    pub fn gathering() -> Self {
        Self {
            skip_header_row: true,
            blank_corner: true,
            label_transition: LabelTransition::Keep,
        }
    }

    /// Fold that treats every row alike.
    pub fn uniform() -> Self {
        Self {
            skip_header_row: false,
            blank_corner: false,
            label_transition: LabelTransition::Reset,
        }
    }
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self::gathering()
    }
}
