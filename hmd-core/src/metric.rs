use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six percentage-change-from-baseline mobility categories.
///
/// The serialized form is the exact dataset column name, so a `Metric` can be
/// used directly as a series label in chart JSON.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Metric {
    #[default]
    #[serde(rename = "Retail_recreation")]
    RetailRecreation,
    #[serde(rename = "Grocery_Pharmacy")]
    GroceryPharmacy,
    #[serde(rename = "Parks")]
    Parks,
    #[serde(rename = "Transit")]
    Transit,
    #[serde(rename = "Workplace")]
    Workplace,
    #[serde(rename = "Residential")]
    Residential,
}

impl Metric {
    /// All metrics in dataset column order.
    pub const ALL: [Metric; 6] = [
        Metric::RetailRecreation,
        Metric::GroceryPharmacy,
        Metric::Parks,
        Metric::Transit,
        Metric::Workplace,
        Metric::Residential,
    ];

    /// The dataset column name for this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::RetailRecreation => "Retail_recreation",
            Metric::GroceryPharmacy => "Grocery_Pharmacy",
            Metric::Parks => "Parks",
            Metric::Transit => "Transit",
            Metric::Workplace => "Workplace",
            Metric::Residential => "Residential",
        }
    }

    /// Position of this metric in [`Metric::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Metric::RetailRecreation => 0,
            Metric::GroceryPharmacy => 1,
            Metric::Parks => 2,
            Metric::Transit => 3,
            Metric::Workplace => 4,
            Metric::Residential => 5,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Error returned when a string names no known metric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.column().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
