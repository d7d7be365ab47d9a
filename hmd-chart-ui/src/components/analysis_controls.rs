//! The per-analysis controls shown below the analysis selector.

use super::{CategorySelect, MetricSelector, WindowSlider};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::analysis::Controls;

#[component]
pub fn AnalysisControls() -> Element {
    let state = use_context::<AppState>();
    let Some(controls) = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.analysis.mode().controls())
    else {
        return rsx! {};
    };

    match controls {
        Controls::Metric { label } => rsx! {
            MetricSelector { label: label.to_string() }
        },
        Controls::MetricAndWindow => rsx! {
            MetricSelector { label: "Select a Metric".to_string() }
            WindowSlider {}
        },
        Controls::Categories => rsx! {
            CategorySelect {}
        },
        Controls::None => rsx! {},
    }
}
