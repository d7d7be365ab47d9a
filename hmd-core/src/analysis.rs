//! The seven canned analyses and the parameters each one carries.

use crate::metric::Metric;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest rolling window the slider allows.
pub const MIN_WINDOW: u32 = 3;
/// Largest rolling window the slider allows.
pub const MAX_WINDOW: u32 = 30;
/// Rolling window the slider starts at.
pub const DEFAULT_WINDOW: u32 = 7;

/// Rolling average window size, always within `[MIN_WINDOW, MAX_WINDOW]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSize(u32);

impl WindowSize {
    /// Build a window size, clamping into the slider range.
    pub fn new(size: u32) -> Self {
        Self(size.clamp(MIN_WINDOW, MAX_WINDOW))
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(DEFAULT_WINDOW)
    }
}

/// The analysis selector's options, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    #[default]
    LinegraphOverview,
    BestWorstStates,
    RollingAverage,
    CorrelationHeatmap,
    YearOverYear,
    DailyChange,
    CategoryComparison,
}

/// Which per-mode control the sidebar exposes for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// A single metric dropdown with the given label.
    Metric { label: &'static str },
    /// A metric dropdown plus the rolling window slider.
    MetricAndWindow,
    /// A multi-select over all six metrics.
    Categories,
    /// No extra controls.
    None,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 7] = [
        AnalysisMode::LinegraphOverview,
        AnalysisMode::BestWorstStates,
        AnalysisMode::RollingAverage,
        AnalysisMode::CorrelationHeatmap,
        AnalysisMode::YearOverYear,
        AnalysisMode::DailyChange,
        AnalysisMode::CategoryComparison,
    ];

    /// Label shown in the analysis selector.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::LinegraphOverview => "Linegraph Overview",
            AnalysisMode::BestWorstStates => "Best/Worst 5 States",
            AnalysisMode::RollingAverage => "Rolling Average by Categories",
            AnalysisMode::CorrelationHeatmap => "Correlation Heatmap Between Metrics",
            AnalysisMode::YearOverYear => "Year-over-Year Comparison",
            AnalysisMode::DailyChange => "Daily Change Percentage",
            AnalysisMode::CategoryComparison => "Category Comparison",
        }
    }

    /// Section header shown above the analysis output.
    pub fn header(&self) -> &'static str {
        match self {
            AnalysisMode::LinegraphOverview => "Linegraph Overview of Change in Mobility",
            AnalysisMode::BestWorstStates => "Best/Worst 5 States in Compliance with Policies",
            AnalysisMode::RollingAverage => "Rolling Average by Categories",
            AnalysisMode::CorrelationHeatmap => "Correlation of Categories",
            AnalysisMode::YearOverYear => "Year-over-Year Comparison",
            AnalysisMode::DailyChange => "Daily Change Percentage",
            AnalysisMode::CategoryComparison => "Category Comparison",
        }
    }

    pub fn controls(&self) -> Controls {
        match self {
            AnalysisMode::LinegraphOverview => Controls::Metric {
                label: "Select a Metric to Analyze",
            },
            AnalysisMode::BestWorstStates
            | AnalysisMode::YearOverYear
            | AnalysisMode::DailyChange => Controls::Metric {
                label: "Select a Metric",
            },
            AnalysisMode::RollingAverage => Controls::MetricAndWindow,
            AnalysisMode::CorrelationHeatmap => Controls::None,
            AnalysisMode::CategoryComparison => Controls::Categories,
        }
    }

    /// Stable identifier used for `<option value>` and CLI arguments.
    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisMode::LinegraphOverview => "linegraph",
            AnalysisMode::BestWorstStates => "best-worst",
            AnalysisMode::RollingAverage => "rolling",
            AnalysisMode::CorrelationHeatmap => "correlation",
            AnalysisMode::YearOverYear => "year-over-year",
            AnalysisMode::DailyChange => "daily-change",
            AnalysisMode::CategoryComparison => "category-comparison",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    /// Accepts either the slug or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AnalysisMode::ALL
            .iter()
            .copied()
            .find(|m| m.slug().eq_ignore_ascii_case(s) || m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown analysis: {}", s))
    }
}

/// A selected analysis together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Analysis {
    LinegraphOverview { metric: Metric },
    BestWorstStates { metric: Metric },
    RollingAverage { metric: Metric, window: WindowSize },
    CorrelationHeatmap,
    YearOverYear { metric: Metric },
    DailyChange { metric: Metric },
    CategoryComparison { categories: Vec<Metric> },
}

impl Analysis {
    /// Default parameters for a mode, reusing `metric` where the mode takes one.
    pub fn for_mode(mode: AnalysisMode, metric: Metric) -> Self {
        match mode {
            AnalysisMode::LinegraphOverview => Analysis::LinegraphOverview { metric },
            AnalysisMode::BestWorstStates => Analysis::BestWorstStates { metric },
            AnalysisMode::RollingAverage => Analysis::RollingAverage {
                metric,
                window: WindowSize::default(),
            },
            AnalysisMode::CorrelationHeatmap => Analysis::CorrelationHeatmap,
            AnalysisMode::YearOverYear => Analysis::YearOverYear { metric },
            AnalysisMode::DailyChange => Analysis::DailyChange { metric },
            AnalysisMode::CategoryComparison => Analysis::CategoryComparison {
                categories: Vec::new(),
            },
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        match self {
            Analysis::LinegraphOverview { .. } => AnalysisMode::LinegraphOverview,
            Analysis::BestWorstStates { .. } => AnalysisMode::BestWorstStates,
            Analysis::RollingAverage { .. } => AnalysisMode::RollingAverage,
            Analysis::CorrelationHeatmap => AnalysisMode::CorrelationHeatmap,
            Analysis::YearOverYear { .. } => AnalysisMode::YearOverYear,
            Analysis::DailyChange { .. } => AnalysisMode::DailyChange,
            Analysis::CategoryComparison { .. } => AnalysisMode::CategoryComparison,
        }
    }

    /// The single metric this analysis is parameterised by, if any.
    pub fn metric(&self) -> Option<Metric> {
        match self {
            Analysis::LinegraphOverview { metric }
            | Analysis::BestWorstStates { metric }
            | Analysis::RollingAverage { metric, .. }
            | Analysis::YearOverYear { metric }
            | Analysis::DailyChange { metric } => Some(*metric),
            Analysis::CorrelationHeatmap | Analysis::CategoryComparison { .. } => None,
        }
    }
}

impl Default for Analysis {
    fn default() -> Self {
        Analysis::for_mode(AnalysisMode::LinegraphOverview, Metric::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_clamps_to_slider_range() {
        assert_eq!(WindowSize::new(1).get(), 3);
        assert_eq!(WindowSize::new(3).get(), 3);
        assert_eq!(WindowSize::new(14).get(), 14);
        assert_eq!(WindowSize::new(30).get(), 30);
        assert_eq!(WindowSize::new(90).get(), 30);
        assert_eq!(WindowSize::default().get(), 7);
    }

    #[test]
    fn every_mode_round_trips_through_analysis() {
        for mode in AnalysisMode::ALL {
            assert_eq!(Analysis::for_mode(mode, Metric::Parks).mode(), mode);
        }
    }

    #[test]
    fn for_mode_carries_metric() {
        let a = Analysis::for_mode(AnalysisMode::RollingAverage, Metric::Transit);
        assert_eq!(
            a,
            Analysis::RollingAverage {
                metric: Metric::Transit,
                window: WindowSize::new(7)
            }
        );
        assert_eq!(
            Analysis::for_mode(AnalysisMode::CorrelationHeatmap, Metric::Transit).metric(),
            None
        );
    }

    #[test]
    fn parses_slug_and_label() {
        assert_eq!(
            "rolling".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::RollingAverage
        );
        assert_eq!(
            "Best/Worst 5 States".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::BestWorstStates
        );
        assert!("forecast".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn controls_per_mode() {
        assert_eq!(
            AnalysisMode::CorrelationHeatmap.controls(),
            Controls::None
        );
        assert_eq!(
            AnalysisMode::CategoryComparison.controls(),
            Controls::Categories
        );
        assert_eq!(
            AnalysisMode::RollingAverage.controls(),
            Controls::MetricAndWindow
        );
    }
}
