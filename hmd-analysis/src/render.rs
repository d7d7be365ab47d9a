//! One renderer per analysis mode.
//!
//! Each renderer is a pure function of its input rows and parameters and
//! returns the sections to show. Empty and single-row input produce empty
//! charts rather than errors.

use crate::chart::{Bar, BarChart, Chart, Heatmap, LineChart, Point, Series};
use crate::stats;
use crate::view::Section;
use hmd_core::{Metric, MobilityRecord, WindowSize};
use hmd_db::models::StateMean;

/// How many states each half of the Best/Worst ranking shows.
pub const RANKING_SIZE: usize = 5;

/// Shown instead of a chart when fewer than two categories are selected.
pub const CATEGORY_PROMPT: &str = "Please select at least two categories for comparison.";

/// The selected county and state, used in chart titles.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub state: &'a str,
    pub county: &'a str,
}

impl std::fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.county, self.state)
    }
}

fn series(label: String, records: &[MobilityRecord], values: Vec<Option<f64>>) -> Series {
    Series {
        label,
        points: records
            .iter()
            .zip(values)
            .map(|(r, value)| Point {
                date: r.date,
                value,
            })
            .collect(),
    }
}

fn metric_values(records: &[MobilityRecord], metric: Metric) -> Vec<Option<f64>> {
    records.iter().map(|r| r.value(metric)).collect()
}

/// Line chart of one metric against date.
pub fn linegraph_overview(records: &[MobilityRecord], metric: Metric, place: Location) -> Section {
    Section::chart(Chart::Line(LineChart {
        title: format!("{} Over Time in {}", metric, place),
        x_label: "Date".to_string(),
        y_label: metric.to_string(),
        series: vec![series(metric.to_string(), records, metric_values(records, metric))],
        value_decimals: 2,
    }))
}

/// Two bar charts over per-state means of the full dataset. The top of the
/// descending ranking is labelled "Worst" and the bottom "Best".
pub fn best_worst_states(state_means: &[StateMean], metric: Metric) -> Vec<Section> {
    let (top, bottom) = stats::head_and_tail(state_means, RANKING_SIZE);
    let bar_chart = |means: Vec<StateMean>| {
        Chart::Bar(BarChart {
            title: None,
            x_label: "State".to_string(),
            y_label: metric.to_string(),
            bars: means
                .into_iter()
                .map(|m| Bar {
                    label: m.state,
                    value: m.value,
                })
                .collect(),
        })
    };
    vec![
        Section::chart(bar_chart(top)).with_subheader(format!("Worst {} States", RANKING_SIZE)),
        Section::chart(bar_chart(bottom)).with_subheader(format!("Best {} States", RANKING_SIZE)),
    ]
}

/// Trailing moving average of one metric.
pub fn rolling_average(
    records: &[MobilityRecord],
    metric: Metric,
    window: WindowSize,
    place: Location,
) -> Section {
    let rolled = stats::rolling_mean(&metric_values(records, metric), window.get());
    Section::chart(Chart::Line(LineChart {
        title: format!(
            "{} Rolling Average ({}-day) in {}",
            metric,
            window.get(),
            place
        ),
        x_label: "Date".to_string(),
        y_label: format!("{} Rolling Avg", metric),
        series: vec![series(format!("{} Rolling Avg", metric), records, rolled)],
        value_decimals: 2,
    }))
}

/// Annotated heatmap of the 6x6 Pearson correlation matrix.
pub fn correlation_heatmap(records: &[MobilityRecord]) -> Section {
    let matrix = stats::correlation_matrix(records);
    let cells: Vec<Vec<Option<f64>>> = matrix.iter().map(|row| row.to_vec()).collect();
    let annotations = cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.map(|v| format!("{:.2}", v)).unwrap_or_default())
                .collect()
        })
        .collect();
    Section::chart(Chart::Heatmap(Heatmap {
        title: "Correlation Heatmap".to_string(),
        labels: Metric::ALL.iter().map(|m| m.to_string()).collect(),
        cells,
        annotations,
        domain: (-1.0, 1.0),
    }))
}

/// One bar per calendar year with the mean of the metric.
pub fn year_over_year(records: &[MobilityRecord], metric: Metric, place: Location) -> Section {
    let bars = stats::yearly_means(records, metric)
        .into_iter()
        .map(|(year, value)| Bar {
            label: year.to_string(),
            value,
        })
        .collect();
    Section::chart(Chart::Bar(BarChart {
        title: Some(format!(
            "Year-over-Year Comparison of {} in {}",
            metric, place
        )),
        x_label: "Year".to_string(),
        y_label: metric.to_string(),
        bars,
    }))
}

/// Percent change between consecutive rows of the filtered series.
pub fn daily_change(records: &[MobilityRecord], metric: Metric, place: Location) -> Section {
    let changes = stats::pct_change(&metric_values(records, metric));
    Section::chart(Chart::Line(LineChart {
        title: format!("Daily Change Percentage of {} in {}", metric, place),
        x_label: "Date".to_string(),
        y_label: "Daily Change (%)".to_string(),
        series: vec![series(
            format!("{} Daily Change (%)", metric),
            records,
            changes,
        )],
        value_decimals: 2,
    }))
}

/// One line per selected metric, or a prompt when fewer than two are selected.
pub fn category_comparison(
    records: &[MobilityRecord],
    categories: &[Metric],
    place: Location,
) -> Section {
    if categories.len() < 2 {
        return Section::message(CATEGORY_PROMPT);
    }
    Section::chart(Chart::Line(LineChart {
        title: format!("Category Comparison in {}", place),
        x_label: "Date".to_string(),
        y_label: "Values".to_string(),
        series: categories
            .iter()
            .map(|m| series(m.to_string(), records, metric_values(records, *m)))
            .collect(),
        value_decimals: 2,
    }))
}
