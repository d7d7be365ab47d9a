//! Start and end date inputs bounded by the dataset's date range.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::dates::{format_date, parse_dataset_date};
use hmd_core::ControlChange;

/// Date range picker. The two dates are not checked against each other; an
/// inverted range simply yields no data.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let Some(catalog) = state.catalog() else {
        return rsx! {};
    };
    let Some((start, end)) = state
        .selection
        .read()
        .as_ref()
        .map(|s| (format_date(&s.start), format_date(&s.end)))
    else {
        return rsx! {};
    };
    let min = format_date(&catalog.min_date);
    let max = format_date(&catalog.max_date);

    let on_start_change = move |evt: Event<FormData>| match parse_dataset_date(&evt.value()) {
        Some(date) => state.dispatch(ControlChange::StartDate(date)),
        None => log::warn!("[HMD] date picker: ignoring start date {:?}", evt.value()),
    };

    let on_end_change = move |evt: Event<FormData>| match parse_dataset_date(&evt.value()) {
        Some(date) => state.dispatch(ControlChange::EndDate(date)),
        None => log::warn!("[HMD] date picker: ignoring end date {:?}", evt.value()),
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                style: LABEL_STYLE,
                "Start Date"
                input {
                    r#type: "date",
                    style: "display: block; width: 100%;",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
        }
        div {
            style: CONTROL_STYLE,
            label {
                style: LABEL_STYLE,
                "End Date"
                input {
                    r#type: "date",
                    style: "display: block; width: 100%;",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
