//! Human Mobility Dashboard
//!
//! A sidebar of filters (state, county, date range, analysis) drives one of
//! seven canned analyses over a per-county daily mobility dataset. The
//! analysis-specific controls sit under the analysis header.
//!
//! Data flow:
//! 1. `build.rs` copies `clean_data.csv` (or `$HMD_DATA_CSV`) into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    initial selection is rendered.
//! 4. Every control change produces a new selection and a new view; the
//!    render effect draws each chart of the view with D3.js.

use dioxus::prelude::*;
use hmd_analysis::{Dashboard, SectionContent};
use hmd_chart_ui::components::{
    AnalysisControls, AnalysisSelector, ChartContainer, ChartHeader, CountySelector,
    DateRangePicker, ErrorDisplay, LoadingSpinner, StateSelector,
};
use hmd_chart_ui::js_bridge;
use hmd_chart_ui::state::AppState;
use hmd_db::Database;

/// The mobility dataset, embedded at build time.
const MOBILITY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/clean_data.csv"));

/// Prefix of the chart container DOM ids; section `i` renders into `{prefix}-{i}`.
const CHART_ID_PREFIX: &str = "mobility-chart";

fn chart_id(index: usize) -> String {
    format!("{}-{}", CHART_ID_PREFIX, index)
}

fn load_dashboard() -> anyhow::Result<Dashboard> {
    let db = Database::new()?;
    db.load_mobility(MOBILITY_CSV)?;
    Dashboard::new(db)
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mobility-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount; any failure is fatal
    use_effect(move || match load_dashboard() {
        Ok(dashboard) => {
            js_bridge::init_charts();
            state.install(dashboard);
        }
        Err(e) => {
            log::error!("[HMD] app: failed to load dataset: {:#}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load mobility data: {:#}", e)));
            state.loading.set(false);
        }
    });

    // Redraw every chart whenever the view changes
    use_effect(move || {
        let Some(view) = (state.view)() else {
            return;
        };
        for (i, section) in view.sections.iter().enumerate() {
            let id = chart_id(i);
            match &section.content {
                SectionContent::Chart(chart) if !chart.is_empty() => {
                    js_bridge::render_chart(&id, chart)
                }
                _ => js_bridge::destroy_chart(&id),
            }
        }
    });

    let view = (state.view)();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                div {
                    style: "padding: 16px; flex: 1;",
                    ErrorDisplay { message: err }
                }
            } else if (state.loading)() {
                div {
                    style: "flex: 1;",
                    LoadingSpinner {}
                }
            } else {
                aside {
                    style: "width: 260px; padding: 16px; background: #F0F2F6; box-sizing: border-box;",
                    h2 { style: "margin-top: 0; font-size: 20px;", "Filters" }
                    StateSelector {}
                    CountySelector {}
                    DateRangePicker {}
                    AnalysisSelector {}
                }
                main {
                    style: "flex: 1; padding: 16px 32px; min-width: 0;",
                    if let Some(view) = view {
                        h1 { style: "margin-top: 0;", "{view.title}" }
                        ChartHeader { title: view.header.to_string() }
                        AnalysisControls {}
                        for (i, section) in view.sections.iter().enumerate() {
                            div {
                                key: "{i}",
                                if let Some(sub) = &section.subheader {
                                    ChartHeader { title: sub.clone(), sub: true }
                                }
                                {match &section.content {
                                    SectionContent::Chart(chart) => rsx! {
                                        ChartContainer {
                                            id: chart_id(i),
                                            empty: chart.is_empty(),
                                            min_height: 420,
                                        }
                                    },
                                    SectionContent::Message(text) => rsx! {
                                        p { style: "color: #444;", "{text}" }
                                    },
                                }}
                            }
                        }
                    }
                }
            }
        }
    }
}
