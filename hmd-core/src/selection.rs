//! Filter selection state.
//!
//! A [`FilterSelection`] is an immutable value. Every sidebar interaction is
//! expressed as a [`ControlChange`] and applied with
//! [`FilterSelection::apply`], which returns the next selection. The
//! [`Catalog`] supplies the option lists the controls are validated against.

use crate::analysis::{Analysis, AnalysisMode, WindowSize};
use crate::dates::clamp_date;
use crate::metric::Metric;
use crate::record::MobilityRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Option lists derived once from the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Distinct states in order of first appearance.
    pub states: Vec<String>,
    /// Distinct counties per state, in order of first appearance.
    pub counties: HashMap<String, Vec<String>>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub row_count: usize,
}

impl Catalog {
    /// Counties offered for `state`; empty for an unknown state.
    pub fn counties_for(&self, state: &str) -> &[String] {
        self.counties.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.counties.contains_key(state)
    }

    pub fn has_county(&self, state: &str, county: &str) -> bool {
        self.counties_for(state).iter().any(|c| c == county)
    }
}

/// A single sidebar interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    State(String),
    County(String),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    Mode(AnalysisMode),
    Metric(Metric),
    Window(u32),
    Categories(Vec<Metric>),
}

/// The user's current selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub state: String,
    pub county: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub analysis: Analysis,
}

impl FilterSelection {
    /// The selection a fresh session starts with: first state, its first
    /// county, the full date range and the line graph overview.
    ///
    /// Returns `None` for an empty catalog.
    pub fn initial(catalog: &Catalog) -> Option<Self> {
        let state = catalog.states.first()?.clone();
        let county = catalog.counties_for(&state).first()?.clone();
        Some(Self {
            state,
            county,
            start: catalog.min_date,
            end: catalog.max_date,
            analysis: Analysis::default(),
        })
    }

    /// Apply one control change and return the resulting selection.
    ///
    /// Values outside the catalog's options are ignored. Changing the state
    /// re-derives the county as the first county of the new state. Dates are
    /// clamped to the dataset range but never checked against each other.
    pub fn apply(self, change: ControlChange, catalog: &Catalog) -> Self {
        match change {
            ControlChange::State(state) => {
                if state == self.state {
                    return self;
                }
                match catalog.counties_for(&state).first() {
                    Some(county) => Self {
                        county: county.clone(),
                        state,
                        ..self
                    },
                    None => {
                        log::warn!("[HMD] selection: ignoring unknown state {:?}", state);
                        self
                    }
                }
            }
            ControlChange::County(county) => {
                if catalog.has_county(&self.state, &county) {
                    Self { county, ..self }
                } else {
                    log::warn!(
                        "[HMD] selection: ignoring county {:?} not in {:?}",
                        county,
                        self.state
                    );
                    self
                }
            }
            ControlChange::StartDate(date) => Self {
                start: clamp_date(date, catalog.min_date, catalog.max_date),
                ..self
            },
            ControlChange::EndDate(date) => Self {
                end: clamp_date(date, catalog.min_date, catalog.max_date),
                ..self
            },
            ControlChange::Mode(mode) => {
                if mode == self.analysis.mode() {
                    return self;
                }
                let metric = self.analysis.metric().unwrap_or_default();
                Self {
                    analysis: Analysis::for_mode(mode, metric),
                    ..self
                }
            }
            ControlChange::Metric(metric) => {
                let analysis = match self.analysis {
                    Analysis::LinegraphOverview { .. } => Analysis::LinegraphOverview { metric },
                    Analysis::BestWorstStates { .. } => Analysis::BestWorstStates { metric },
                    Analysis::RollingAverage { window, .. } => {
                        Analysis::RollingAverage { metric, window }
                    }
                    Analysis::YearOverYear { .. } => Analysis::YearOverYear { metric },
                    Analysis::DailyChange { .. } => Analysis::DailyChange { metric },
                    other => other,
                };
                Self { analysis, ..self }
            }
            ControlChange::Window(size) => {
                let analysis = match self.analysis {
                    Analysis::RollingAverage { metric, .. } => Analysis::RollingAverage {
                        metric,
                        window: WindowSize::new(size),
                    },
                    other => other,
                };
                Self { analysis, ..self }
            }
            ControlChange::Categories(categories) => {
                let analysis = match self.analysis {
                    Analysis::CategoryComparison { .. } => {
                        let mut unique: Vec<Metric> = Vec::with_capacity(categories.len());
                        for m in categories {
                            if !unique.contains(&m) {
                                unique.push(m);
                            }
                        }
                        Analysis::CategoryComparison { categories: unique }
                    }
                    other => other,
                };
                Self { analysis, ..self }
            }
        }
    }

    /// True if `record` passes the state, county and inclusive date predicates.
    pub fn matches(&self, record: &MobilityRecord) -> bool {
        record.state == self.state
            && record.county == self.county
            && record.date >= self.start
            && record.date <= self.end
    }

    /// The filtered subset of `records`, ordered by date. Records sharing a
    /// date keep their input order.
    pub fn filter(&self, records: &[MobilityRecord]) -> Vec<MobilityRecord> {
        let mut subset: Vec<MobilityRecord> =
            records.iter().filter(|r| self.matches(r)).cloned().collect();
        subset.sort_by_key(|r| r.date);
        subset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(state: &str, county: &str, date: NaiveDate, retail: f64) -> MobilityRecord {
        MobilityRecord {
            date,
            state: state.to_string(),
            county: county.to_string(),
            retail_recreation: Some(retail),
            grocery_pharmacy: None,
            parks: None,
            transit: None,
            workplace: None,
            residential: None,
        }
    }

    fn sample_catalog() -> Catalog {
        let mut counties = HashMap::new();
        counties.insert(
            "CA".to_string(),
            vec!["Los Angeles".to_string(), "Orange".to_string()],
        );
        counties.insert("TX".to_string(), vec!["Travis".to_string()]);
        Catalog {
            states: vec!["CA".to_string(), "TX".to_string()],
            counties,
            min_date: ymd(2021, 1, 1),
            max_date: ymd(2021, 12, 31),
            row_count: 10,
        }
    }

    #[test]
    fn initial_selection_uses_first_options_and_full_range() {
        let sel = FilterSelection::initial(&sample_catalog()).unwrap();
        assert_eq!(sel.state, "CA");
        assert_eq!(sel.county, "Los Angeles");
        assert_eq!(sel.start, ymd(2021, 1, 1));
        assert_eq!(sel.end, ymd(2021, 12, 31));
        assert_eq!(sel.analysis.mode(), AnalysisMode::LinegraphOverview);
    }

    #[test]
    fn initial_selection_of_empty_catalog_is_none() {
        let catalog = Catalog {
            states: Vec::new(),
            counties: HashMap::new(),
            min_date: ymd(2021, 1, 1),
            max_date: ymd(2021, 1, 1),
            row_count: 0,
        };
        assert!(FilterSelection::initial(&catalog).is_none());
    }

    #[test]
    fn changing_state_rederives_county() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog)
            .unwrap()
            .apply(ControlChange::County("Orange".to_string()), &catalog)
            .apply(ControlChange::State("TX".to_string()), &catalog);
        assert_eq!(sel.state, "TX");
        assert_eq!(sel.county, "Travis");
    }

    #[test]
    fn unknown_state_and_foreign_county_are_ignored() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog).unwrap();
        let after = sel
            .clone()
            .apply(ControlChange::State("ZZ".to_string()), &catalog)
            .apply(ControlChange::County("Travis".to_string()), &catalog);
        assert_eq!(after, sel);
    }

    #[test]
    fn dates_are_clamped_but_not_ordered() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog)
            .unwrap()
            .apply(ControlChange::StartDate(ymd(2021, 9, 1)), &catalog)
            .apply(ControlChange::EndDate(ymd(2021, 3, 1)), &catalog);
        assert_eq!(sel.start, ymd(2021, 9, 1));
        assert_eq!(sel.end, ymd(2021, 3, 1));

        let clamped = sel
            .apply(ControlChange::StartDate(ymd(2019, 1, 1)), &catalog)
            .apply(ControlChange::EndDate(ymd(2030, 1, 1)), &catalog);
        assert_eq!(clamped.start, ymd(2021, 1, 1));
        assert_eq!(clamped.end, ymd(2021, 12, 31));
    }

    #[test]
    fn mode_change_carries_metric() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog)
            .unwrap()
            .apply(ControlChange::Metric(Metric::Parks), &catalog)
            .apply(ControlChange::Mode(AnalysisMode::RollingAverage), &catalog)
            .apply(ControlChange::Window(12), &catalog);
        assert_eq!(
            sel.analysis,
            Analysis::RollingAverage {
                metric: Metric::Parks,
                window: WindowSize::new(12)
            }
        );

        let heatmap = sel.apply(ControlChange::Mode(AnalysisMode::CorrelationHeatmap), &catalog);
        assert_eq!(heatmap.analysis, Analysis::CorrelationHeatmap);
        let back = heatmap.apply(ControlChange::Mode(AnalysisMode::DailyChange), &catalog);
        assert_eq!(
            back.analysis,
            Analysis::DailyChange {
                metric: Metric::RetailRecreation
            }
        );
    }

    #[test]
    fn controls_for_other_modes_are_ignored() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog)
            .unwrap()
            .apply(ControlChange::Mode(AnalysisMode::CorrelationHeatmap), &catalog);
        let after = sel
            .clone()
            .apply(ControlChange::Metric(Metric::Parks), &catalog)
            .apply(ControlChange::Window(10), &catalog)
            .apply(ControlChange::Categories(vec![Metric::Parks]), &catalog);
        assert_eq!(after, sel);
    }

    #[test]
    fn categories_are_deduplicated_in_order() {
        let catalog = sample_catalog();
        let sel = FilterSelection::initial(&catalog)
            .unwrap()
            .apply(ControlChange::Mode(AnalysisMode::CategoryComparison), &catalog)
            .apply(
                ControlChange::Categories(vec![Metric::Transit, Metric::Parks, Metric::Transit]),
                &catalog,
            );
        assert_eq!(
            sel.analysis,
            Analysis::CategoryComparison {
                categories: vec![Metric::Transit, Metric::Parks]
            }
        );
    }

    #[test]
    fn filter_matches_all_predicates_inclusively() {
        let records = vec![
            record("CA", "Los Angeles", ymd(2021, 1, 3), 3.0),
            record("CA", "Los Angeles", ymd(2021, 1, 1), 1.0),
            record("CA", "Orange", ymd(2021, 1, 2), 9.0),
            record("TX", "Los Angeles", ymd(2021, 1, 2), 9.0),
            record("CA", "Los Angeles", ymd(2021, 1, 5), 5.0),
        ];
        let sel = FilterSelection {
            state: "CA".to_string(),
            county: "Los Angeles".to_string(),
            start: ymd(2021, 1, 1),
            end: ymd(2021, 1, 3),
            analysis: Analysis::default(),
        };
        let subset = sel.filter(&records);
        let dates: Vec<NaiveDate> = subset.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![ymd(2021, 1, 1), ymd(2021, 1, 3)]);
    }

    #[test]
    fn filter_is_idempotent() {
        let records: Vec<MobilityRecord> = (1..=9)
            .map(|d| record("CA", "Los Angeles", ymd(2021, 1, d), d as f64))
            .chain((1..=9).map(|d| record("CA", "Orange", ymd(2021, 1, d), d as f64)))
            .collect();
        let sel = FilterSelection {
            state: "CA".to_string(),
            county: "Orange".to_string(),
            start: ymd(2021, 1, 2),
            end: ymd(2021, 1, 6),
            analysis: Analysis::default(),
        };
        let once = sel.filter(&records);
        let twice = sel.filter(&once);
        assert_eq!(once.len(), 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn inverted_range_filters_to_empty() {
        let records = vec![record("CA", "Los Angeles", ymd(2021, 1, 3), 3.0)];
        let sel = FilterSelection {
            state: "CA".to_string(),
            county: "Los Angeles".to_string(),
            start: ymd(2021, 1, 5),
            end: ymd(2021, 1, 1),
            analysis: Analysis::default(),
        };
        assert!(sel.filter(&records).is_empty());
    }
}
