//! Query result model structs.

use serde::Serialize;

/// Mean of one metric over every row of a state, across the full dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateMean {
    pub state: String,
    pub value: f64,
}
