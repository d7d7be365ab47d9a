//! The page model for one interaction.

use crate::chart::Chart;
use serde::Serialize;

/// Page title shown above every analysis.
pub const DASHBOARD_TITLE: &str = "Human Mobility Dashboard";

/// What a section shows: a chart, or a short guidance message instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionContent {
    Chart(Chart),
    Message(String),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    pub subheader: Option<String>,
    pub content: SectionContent,
}

impl Section {
    pub fn chart(chart: Chart) -> Self {
        Self {
            subheader: None,
            content: SectionContent::Chart(chart),
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            subheader: None,
            content: SectionContent::Message(text.into()),
        }
    }

    pub fn with_subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub title: &'static str,
    pub header: &'static str,
    pub sections: Vec<Section>,
}

impl DashboardView {
    /// Charts in section order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections.iter().filter_map(|s| match &s.content {
            SectionContent::Chart(c) => Some(c),
            SectionContent::Message(_) => None,
        })
    }
}
