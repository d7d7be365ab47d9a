//! Section header component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Header text
    pub title: String,
    /// Render as a smaller subheader
    #[props(default = false)]
    pub sub: bool,
}

/// Header for an analysis or one of its sections.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            if props.sub {
                h3 {
                    style: "margin: 12px 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
            } else {
                h2 {
                    style: "margin: 0 0 4px 0; font-size: 20px;",
                    "{props.title}"
                }
            }
        }
    }
}
