//! Core types for the human mobility dashboard.
//!
//! This crate has no I/O. It defines:
//! - `metric`: the six mobility categories and their dataset column names
//! - `record`: a single row of the mobility dataset
//! - `analysis`: the seven analysis modes and their parameters
//! - `selection`: the immutable filter selection and how controls update it
//! - `dates`: date parsing for the dataset's `Date` column
//! - `error`: the fatal load error taxonomy

pub mod analysis;
pub mod dates;
pub mod error;
pub mod metric;
pub mod record;
pub mod selection;

pub use analysis::{Analysis, AnalysisMode, Controls, WindowSize};
pub use metric::Metric;
pub use record::MobilityRecord;
pub use selection::{Catalog, ControlChange, FilterSelection};
