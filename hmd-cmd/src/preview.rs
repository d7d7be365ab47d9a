//! `preview`: run one analysis headlessly and print the view as text.

use chrono::NaiveDate;
use hmd_analysis::chart::{BarChart, Chart, Heatmap, LineChart};
use hmd_analysis::{Dashboard, DashboardView, SectionContent};
use hmd_core::{AnalysisMode, Catalog, ControlChange, FilterSelection, Metric};
use hmd_db::Database;
use log::info;
use std::fmt::Write;

/// The selection requested on the command line. Unset fields keep the
/// initial selection's value.
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    pub state: Option<String>,
    pub county: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub analysis: AnalysisMode,
    pub metric: Option<Metric>,
    pub window: Option<u32>,
    pub categories: Vec<Metric>,
}

/// Load the dataset, build the requested selection and print its view.
pub fn run_preview(data_path: &str, request: &PreviewRequest) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_mobility_file(data_path)?;
    let dashboard = Dashboard::new(db)?;
    let selection = build_selection(dashboard.catalog(), request)?;
    info!(
        "Previewing {} for {}, {}",
        selection.analysis.mode(),
        selection.county,
        selection.state
    );
    let view = dashboard.view(&selection)?;
    print!("{}", format_view(&view));
    Ok(())
}

/// Build a selection the same way the dashboard does: start from the
/// initial selection and apply one control change per requested field.
///
/// Unlike the dashboard, an unknown state or county is an error here.
pub fn build_selection(
    catalog: &Catalog,
    request: &PreviewRequest,
) -> anyhow::Result<FilterSelection> {
    let mut selection = FilterSelection::initial(catalog)
        .ok_or_else(|| anyhow::anyhow!("dataset has no state with a county"))?;

    if let Some(state) = &request.state {
        if !catalog.has_state(state) {
            anyhow::bail!("unknown state: {}", state);
        }
        selection = selection.apply(ControlChange::State(state.clone()), catalog);
    }
    if let Some(county) = &request.county {
        if !catalog.has_county(&selection.state, county) {
            anyhow::bail!("unknown county {} in {}", county, selection.state);
        }
        selection = selection.apply(ControlChange::County(county.clone()), catalog);
    }

    let mut changes = Vec::new();
    changes.extend(request.start.map(ControlChange::StartDate));
    changes.extend(request.end.map(ControlChange::EndDate));
    changes.push(ControlChange::Mode(request.analysis));
    changes.extend(request.metric.map(ControlChange::Metric));
    changes.extend(request.window.map(ControlChange::Window));
    if !request.categories.is_empty() {
        changes.push(ControlChange::Categories(request.categories.clone()));
    }

    Ok(changes
        .into_iter()
        .fold(selection, |sel, change| sel.apply(change, catalog)))
}

fn cell(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| "-".to_string())
}

fn write_line_chart(out: &mut String, chart: &LineChart) {
    let decimals = chart.value_decimals as usize;
    let _ = writeln!(out, "{}", chart.title);
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    let _ = writeln!(out, "{:<12}{}", chart.x_label, labels.join("\t"));
    let rows = chart.series.first().map(|s| s.points.len()).unwrap_or(0);
    for i in 0..rows {
        let date = chart.series[0].points[i].date;
        let values: Vec<String> = chart
            .series
            .iter()
            .map(|s| cell(s.points.get(i).and_then(|p| p.value), decimals))
            .collect();
        let _ = writeln!(out, "{:<12}{}", date.to_string(), values.join("\t"));
    }
}

fn write_bar_chart(out: &mut String, chart: &BarChart) {
    if let Some(title) = &chart.title {
        let _ = writeln!(out, "{}", title);
    }
    let _ = writeln!(out, "{:<12}{}", chart.x_label, chart.y_label);
    for bar in &chart.bars {
        let _ = writeln!(out, "{:<12}{:.2}", bar.label, bar.value);
    }
}

fn write_heatmap(out: &mut String, chart: &Heatmap) {
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(out, "{:<18}{}", "", chart.labels.join("\t"));
    for (label, row) in chart.labels.iter().zip(&chart.annotations) {
        let cells: Vec<&str> = row
            .iter()
            .map(|a| if a.is_empty() { "-" } else { a.as_str() })
            .collect();
        let _ = writeln!(out, "{:<18}{}", label, cells.join("\t"));
    }
}

/// Render a view as plain text: title, header, then each section.
pub fn format_view(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "== {} ==", view.header);
    for section in &view.sections {
        let _ = writeln!(out);
        if let Some(sub) = &section.subheader {
            let _ = writeln!(out, "-- {} --", sub);
        }
        match &section.content {
            SectionContent::Message(text) => {
                let _ = writeln!(out, "{}", text);
            }
            SectionContent::Chart(chart) if chart.is_empty() => {
                if let Some(title) = chart.title() {
                    let _ = writeln!(out, "{}", title);
                }
                let _ = writeln!(out, "(no data)");
            }
            SectionContent::Chart(Chart::Line(c)) => write_line_chart(&mut out, c),
            SectionContent::Chart(Chart::Bar(c)) => write_bar_chart(&mut out, c),
            SectionContent::Chart(Chart::Heatmap(c)) => write_heatmap(&mut out, c),
        }
    }
    out
}
