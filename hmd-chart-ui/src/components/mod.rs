//! Reusable Dioxus RSX components for the mobility dashboard.

mod analysis_controls;
mod analysis_selector;
mod category_select;
mod chart_container;
mod chart_header;
mod county_selector;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod state_selector;
mod window_slider;

pub use analysis_controls::AnalysisControls;
pub use analysis_selector::AnalysisSelector;
pub use category_select::CategorySelect;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use county_selector::CountySelector;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use state_selector::StateSelector;
pub use window_slider::WindowSlider;

/// Inline style shared by sidebar control labels.
const LABEL_STYLE: &str = "display: block; font-weight: bold; margin-bottom: 4px;";
/// Inline style shared by sidebar control wrappers.
const CONTROL_STYLE: &str = "margin: 12px 0;";
