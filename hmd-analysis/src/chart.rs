//! Chart descriptions.
//!
//! All structs serialize to the camelCase JSON the D3 renderers in
//! `hmd-chart-ui` expect. A chart is a description only; drawing happens in
//! the browser.

use chrono::NaiveDate;
use serde::Serialize;

/// One chart to draw.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Heatmap(Heatmap),
}

impl Chart {
    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        match self {
            Chart::Line(c) => c
                .series
                .iter()
                .all(|s| s.points.iter().all(|p| p.value.is_none())),
            Chart::Bar(c) => c.bars.is_empty(),
            Chart::Heatmap(c) => c.cells.iter().flatten().all(Option::is_none),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Chart::Line(c) => Some(&c.title),
            Chart::Bar(c) => c.title.as_deref(),
            Chart::Heatmap(c) => Some(&c.title),
        }
    }
}

/// A single point of a time series. `None` values leave a gap in the line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Point {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// One labelled line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

/// A date-axis line chart with one or more series and a legend.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Decimal places used for tooltip values.
    pub value_decimals: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A categorical bar chart. Bars are drawn in the given order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// An annotated square heatmap over a diverging color scale centred on 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub title: String,
    pub labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
    /// Cell text, two decimals; empty for undefined cells.
    pub annotations: Vec<Vec<String>>,
    pub domain: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_chart_json_shape() {
        let chart = Chart::Line(LineChart {
            title: "Parks Over Time in Travis, TX".to_string(),
            x_label: "Date".to_string(),
            y_label: "Parks".to_string(),
            series: vec![Series {
                label: "Parks".to_string(),
                points: vec![Point {
                    date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                    value: None,
                }],
            }],
            value_decimals: 2,
        });
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["xLabel"], "Date");
        assert_eq!(json["series"][0]["points"][0]["date"], "2021-01-01");
        assert!(json["series"][0]["points"][0]["value"].is_null());
        assert!(chart.is_empty());
    }

    #[test]
    fn empty_bar_chart_has_no_title_in_json() {
        let chart = Chart::Bar(BarChart {
            title: None,
            x_label: "State".to_string(),
            y_label: "Parks".to_string(),
            bars: Vec::new(),
        });
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "bar");
        assert!(json["title"].is_null());
        assert!(chart.is_empty());
        assert_eq!(chart.title(), None);
    }
}
