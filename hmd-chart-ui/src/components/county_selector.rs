//! Dropdown selector for choosing a county within the selected state.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::ControlChange;

/// County dropdown. Only counties of the currently selected state are offered.
#[component]
pub fn CountySelector() -> Element {
    let mut state = use_context::<AppState>();
    let Some(catalog) = state.catalog() else {
        return rsx! {};
    };
    let Some((current_state, selected)) = state
        .selection
        .read()
        .as_ref()
        .map(|s| (s.state.clone(), s.county.clone()))
    else {
        return rsx! {};
    };
    let counties = catalog.counties_for(&current_state).to_vec();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(ControlChange::County(evt.value()));
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                r#for: "county-select",
                style: LABEL_STYLE,
                "Select County"
            }
            select {
                id: "county-select",
                style: "width: 100%;",
                onchange: on_change,
                for county in counties.iter() {
                    option {
                        value: "{county}",
                        selected: *county == selected,
                        "{county}"
                    }
                }
            }
        }
    }
}
