//! Slider for the rolling average window.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::analysis::{Analysis, WindowSize, MAX_WINDOW, MIN_WINDOW};
use hmd_core::ControlChange;

#[component]
pub fn WindowSlider() -> Element {
    let mut state = use_context::<AppState>();
    let window = match state.selection.read().as_ref().map(|s| &s.analysis) {
        Some(Analysis::RollingAverage { window, .. }) => *window,
        _ => WindowSize::default(),
    };
    let value = window.get();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(size) = evt.value().parse::<u32>() {
            state.dispatch(ControlChange::Window(size));
        }
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                r#for: "window-slider",
                style: LABEL_STYLE,
                "Select Rolling Window Size: {value}"
            }
            input {
                id: "window-slider",
                r#type: "range",
                style: "width: 100%;",
                min: "{MIN_WINDOW}",
                max: "{MAX_WINDOW}",
                step: "1",
                value: "{value}",
                onchange: on_change,
            }
        }
    }
}
