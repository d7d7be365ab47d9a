//! Dropdown selector for choosing a state.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::ControlChange;

/// State dropdown. Options are the dataset's distinct states in order of
/// first appearance. Changing the state also resets the county.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let Some(catalog) = state.catalog() else {
        return rsx! {};
    };
    let selected = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.state.clone())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(ControlChange::State(evt.value()));
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                r#for: "state-select",
                style: LABEL_STYLE,
                "Select State"
            }
            select {
                id: "state-select",
                style: "width: 100%;",
                onchange: on_change,
                for name in catalog.states.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
