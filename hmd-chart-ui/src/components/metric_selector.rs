//! Dropdown selector for a single metric.

use super::{CONTROL_STYLE, LABEL_STYLE};
use crate::state::AppState;
use dioxus::prelude::*;
use hmd_core::{ControlChange, Metric};

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    /// Label shown above the dropdown; differs between analyses
    pub label: String,
}

#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let selected = state
        .selection
        .read()
        .as_ref()
        .and_then(|s| s.analysis.metric())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.dispatch(ControlChange::Metric(metric)),
        Err(e) => log::warn!("[HMD] metric selector: {}", e),
    };

    rsx! {
        div {
            style: CONTROL_STYLE,
            label {
                r#for: "metric-select",
                style: LABEL_STYLE,
                "{props.label}"
            }
            select {
                id: "metric-select",
                style: "width: 100%;",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: "{metric}",
                        selected: metric == selected,
                        "{metric}"
                    }
                }
            }
        }
    }
}
