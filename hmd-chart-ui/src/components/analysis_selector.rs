//! Dropdown selector for the analysis mode.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::{AnalysisMode, ControlChange};

#[component]
pub fn AnalysisSelector() -> Element {
    let mut state = use_context::<AppState>();
    let Some(current) = state.selection.read().as_ref().map(|s| s.analysis.mode()) else {
        return rsx! {};
    };

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<AnalysisMode>() {
        Ok(mode) => state.dispatch(ControlChange::Mode(mode)),
        Err(e) => log::warn!("[HMD] analysis selector: {}", e),
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                r#for: "analysis-select",
                style: LABEL_STYLE,
                "Select Analysis"
            }
            select {
                id: "analysis-select",
                style: "width: 100%;",
                onchange: on_change,
                for mode in AnalysisMode::ALL {
                    option {
                        value: "{mode.slug()}",
                        selected: mode == current,
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
