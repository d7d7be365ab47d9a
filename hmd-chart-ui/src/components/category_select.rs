//! Multi-select over the six metrics for Category Comparison.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::{Analysis, ControlChange, Metric};

/// One checkbox per metric. Selection order is kept, so lines are drawn in
/// the order the metrics were picked.
#[component]
pub fn CategorySelect() -> Element {
    let state = use_context::<AppState>();
    let selected = match state.selection.read().as_ref().map(|s| &s.analysis) {
        Some(Analysis::CategoryComparison { categories }) => categories.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            span {
                style: LABEL_STYLE,
                "Select Categories to Compare"
            }
            for metric in Metric::ALL {
                CategoryCheckbox {
                    metric,
                    checked: selected.contains(&metric),
                    selected: selected.clone(),
                }
            }
        }
    }
}

#[component]
fn CategoryCheckbox(metric: Metric, checked: bool, selected: Vec<Metric>) -> Element {
    let mut state = use_context::<AppState>();
    let id = format!("category-{}", metric.index());

    let on_change = move |_evt: Event<FormData>| {
        let mut next = selected.clone();
        if checked {
            next.retain(|m| *m != metric);
        } else {
            next.push(metric);
        }
        state.dispatch(ControlChange::Categories(next));
    };

    rsx! {
        div {
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            label {
                r#for: "{id}",
                style: "margin-left: 4px;",
                "{metric}"
            }
        }
    }
}
