//! The seven dashboard analyses.
//!
//! - `stats`: rolling mean, percent change, Pearson correlation and grouped means
//! - `chart`: serializable chart descriptions consumed by the D3 renderers
//! - `view`: the page model produced for one interaction
//! - `render`: one pure renderer per analysis mode
//! - `dispatch`: the [`Dashboard`] that turns a selection into a view

pub mod chart;
pub mod dispatch;
pub mod render;
pub mod stats;
pub mod view;

pub use chart::Chart;
pub use dispatch::Dashboard;
pub use view::{DashboardView, Section, SectionContent};
