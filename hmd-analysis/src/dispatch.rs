//! Turns a [`FilterSelection`] into a [`DashboardView`].

use crate::render::{self, Location};
use crate::view::{DashboardView, DASHBOARD_TITLE};
use hmd_core::{Analysis, Catalog, ControlChange, FilterSelection, MobilityRecord};
use hmd_db::Database;

/// A loaded dataset together with its selector catalog.
///
/// Cheap to clone; clones share the same database.
#[derive(Clone)]
pub struct Dashboard {
    db: Database,
    catalog: Catalog,
}

impl Dashboard {
    /// Derive the catalog from a loaded database. Fails if the database is
    /// empty.
    pub fn new(db: Database) -> anyhow::Result<Self> {
        let catalog = db.query_catalog()?;
        Ok(Self { db, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The selection a fresh session starts with.
    pub fn initial_selection(&self) -> anyhow::Result<FilterSelection> {
        FilterSelection::initial(&self.catalog)
            .ok_or_else(|| anyhow::anyhow!("catalog has no state with a county"))
    }

    /// Render the view for `selection`.
    ///
    /// Best/Worst ranks every state over the full dataset; every other
    /// analysis works on the filtered subset.
    pub fn view(&self, selection: &FilterSelection) -> anyhow::Result<DashboardView> {
        let mode = selection.analysis.mode();
        log::info!(
            "[HMD] dispatch: {} for {}, {} from {} to {}",
            mode.slug(),
            selection.county,
            selection.state,
            selection.start,
            selection.end
        );
        let place = Location {
            state: &selection.state,
            county: &selection.county,
        };

        let sections = match &selection.analysis {
            Analysis::BestWorstStates { metric } => {
                let means = self.db.query_state_means(*metric)?;
                render::best_worst_states(&means, *metric)
            }
            Analysis::LinegraphOverview { metric } => vec![render::linegraph_overview(
                &self.subset(selection)?,
                *metric,
                place,
            )],
            Analysis::RollingAverage { metric, window } => vec![render::rolling_average(
                &self.subset(selection)?,
                *metric,
                *window,
                place,
            )],
            Analysis::CorrelationHeatmap => {
                vec![render::correlation_heatmap(&self.subset(selection)?)]
            }
            Analysis::YearOverYear { metric } => vec![render::year_over_year(
                &self.subset(selection)?,
                *metric,
                place,
            )],
            Analysis::DailyChange { metric } => vec![render::daily_change(
                &self.subset(selection)?,
                *metric,
                place,
            )],
            Analysis::CategoryComparison { categories } => vec![render::category_comparison(
                &self.subset(selection)?,
                categories,
                place,
            )],
        };

        Ok(DashboardView {
            title: DASHBOARD_TITLE,
            header: mode.header(),
            sections,
        })
    }

    fn subset(&self, selection: &FilterSelection) -> anyhow::Result<Vec<MobilityRecord>> {
        let rows = self.db.query_filtered(selection)?;
        if rows.is_empty() {
            log::warn!("[HMD] dispatch: selection matched no rows");
        }
        Ok(rows)
    }

    /// Apply one control change and render the resulting selection.
    pub fn handle(
        &self,
        current: FilterSelection,
        change: ControlChange,
    ) -> anyhow::Result<(FilterSelection, DashboardView)> {
        let next = current.apply(change, &self.catalog);
        let view = self.view(&next)?;
        Ok((next, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::render::CATEGORY_PROMPT;
    use crate::view::SectionContent;
    use chrono::NaiveDate;
    use hmd_core::{AnalysisMode, Metric};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_dashboard() -> Dashboard {
        let db = Database::new().unwrap();
        db.load_mobility(
            "\
Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential
2020-12-30,CA,Los Angeles,-30,-10,5,-50,-40,12
2020-12-31,CA,Los Angeles,-20,-8,7,-45,-38,11
2021-01-01,CA,Los Angeles,-10,-5,10,-40,-30,9
2021-01-02,CA,Los Angeles,-15,-6,,-42,-33,10
2021-01-01,CA,Orange,-12,-4,15,-35,-28,8
2021-01-01,TX,Travis,-5,-2,20,-25,-20,6
2021-01-01,TX,Harris,-8,-3,18,-30,-22,7
2021-01-01,NY,Kings,-40,-15,-5,-60,-50,15
",
        )
        .unwrap();
        Dashboard::new(db).unwrap()
    }

    fn select(dash: &Dashboard, changes: Vec<ControlChange>) -> FilterSelection {
        changes
            .into_iter()
            .fold(dash.initial_selection().unwrap(), |sel, change| {
                sel.apply(change, dash.catalog())
            })
    }

    #[test]
    fn initial_view_is_linegraph_of_first_county() {
        let dash = sample_dashboard();
        let sel = dash.initial_selection().unwrap();
        assert_eq!(sel.state, "CA");
        assert_eq!(sel.county, "Los Angeles");
        assert_eq!(sel.start, ymd(2020, 12, 30));
        assert_eq!(sel.end, ymd(2021, 1, 2));

        let view = dash.view(&sel).unwrap();
        assert_eq!(view.title, "Human Mobility Dashboard");
        assert_eq!(view.header, "Linegraph Overview of Change in Mobility");
        assert_eq!(view.sections.len(), 1);
        let title = view.charts().next().unwrap().title().unwrap();
        assert_eq!(title, "Retail_recreation Over Time in Los Angeles, CA");
    }

    #[test]
    fn every_mode_renders() {
        let dash = sample_dashboard();
        for mode in AnalysisMode::ALL {
            let sel = select(&dash, vec![ControlChange::Mode(mode)]);
            let view = dash.view(&sel).unwrap();
            assert_eq!(view.header, mode.header());
            assert!(!view.sections.is_empty(), "{} produced no sections", mode);
        }
    }

    #[test]
    fn best_worst_ignores_filters() {
        let dash = sample_dashboard();
        let sel = select(
            &dash,
            vec![
                ControlChange::Mode(AnalysisMode::BestWorstStates),
                ControlChange::State("NY".to_string()),
                ControlChange::StartDate(ymd(2030, 1, 1)),
            ],
        );
        let view = dash.view(&sel).unwrap();
        assert_eq!(view.sections.len(), 2);
        let Some(Chart::Bar(worst)) = view.charts().next() else {
            panic!("expected a bar chart");
        };
        let states: Vec<&str> = worst.bars.iter().map(|b| b.label.as_str()).collect();
        // Retail means: TX -6.5, CA -17.4, NY -40
        assert_eq!(states, vec!["TX", "CA", "NY"]);
    }

    #[test]
    fn category_comparison_prompts_until_two_selected() {
        let dash = sample_dashboard();
        let sel = select(&dash, vec![ControlChange::Mode(AnalysisMode::CategoryComparison)]);
        let view = dash.view(&sel).unwrap();
        assert_eq!(
            view.sections[0].content,
            SectionContent::Message(CATEGORY_PROMPT.to_string())
        );

        let (_, view) = dash
            .handle(
                sel,
                ControlChange::Categories(vec![Metric::Parks, Metric::Workplace]),
            )
            .unwrap();
        let Some(Chart::Line(chart)) = view.charts().next() else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.title, "Category Comparison in Los Angeles, CA");
    }

    #[test]
    fn handle_switches_state_and_county() {
        let dash = sample_dashboard();
        let sel = dash.initial_selection().unwrap();
        let (sel, view) = dash
            .handle(sel, ControlChange::State("TX".to_string()))
            .unwrap();
        assert_eq!(sel.county, "Travis");
        let title = view.charts().next().unwrap().title().unwrap().to_string();
        assert_eq!(title, "Retail_recreation Over Time in Travis, TX");

        let (sel, _) = dash
            .handle(sel, ControlChange::County("Harris".to_string()))
            .unwrap();
        assert_eq!(sel.county, "Harris");
    }

    #[test]
    fn inverted_range_renders_empty_chart() {
        let dash = sample_dashboard();
        let sel = select(
            &dash,
            vec![
                ControlChange::StartDate(ymd(2021, 1, 2)),
                ControlChange::EndDate(ymd(2020, 12, 30)),
            ],
        );
        let view = dash.view(&sel).unwrap();
        assert!(view.charts().all(Chart::is_empty));
    }

    #[test]
    fn rolling_window_reaches_chart_title() {
        let dash = sample_dashboard();
        let sel = select(
            &dash,
            vec![
                ControlChange::Mode(AnalysisMode::RollingAverage),
                ControlChange::Metric(Metric::Transit),
                ControlChange::Window(3),
            ],
        );
        let view = dash.view(&sel).unwrap();
        let Some(Chart::Line(chart)) = view.charts().next() else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.title, "Transit Rolling Average (3-day) in Los Angeles, CA");
        let values: Vec<Option<f64>> = chart.series[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[1], None);
        assert!((values[2].unwrap() - -45.0).abs() < 1e-9);
    }

    #[test]
    fn views_are_deterministic() {
        let dash = sample_dashboard();
        for mode in AnalysisMode::ALL {
            let sel = select(&dash, vec![ControlChange::Mode(mode)]);
            assert_eq!(dash.view(&sel).unwrap(), dash.view(&sel).unwrap());
        }
    }
}
