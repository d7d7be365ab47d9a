//! Typed query methods for retrieving mobility data from the database.
//!
//! Dates are stored as `YYYY-MM-DD` text, so string comparison in SQL
//! matches calendar order.

use crate::models::StateMean;
use crate::schema::metric_column;
use crate::Database;
use chrono::NaiveDate;
use hmd_core::dates::{format_date, DATE_FORMAT};
use hmd_core::{Catalog, FilterSelection, Metric, MobilityRecord};
use rusqlite::{params, Row};
use std::collections::HashMap;

/// Columns selected for a full [`MobilityRecord`], in `record_from_row` order.
const RECORD_COLUMNS: &str = "date, state, county, retail_recreation, grocery_pharmacy, \
                              parks, transit, workplace, residential";

fn parse_stored_date(idx: usize, text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<MobilityRecord> {
    let date: String = row.get(0)?;
    Ok(MobilityRecord {
        date: parse_stored_date(0, &date)?,
        state: row.get(1)?,
        county: row.get(2)?,
        retail_recreation: row.get(3)?,
        grocery_pharmacy: row.get(4)?,
        parks: row.get(5)?,
        transit: row.get(6)?,
        workplace: row.get(7)?,
        residential: row.get(8)?,
    })
}

impl Database {
    /// Build the selector catalog: distinct states and per-state counties in
    /// order of first appearance, the date bounds and the row count.
    ///
    /// Fails on an empty database; the dashboard cannot start without data.
    pub fn query_catalog(&self) -> anyhow::Result<Catalog> {
        let conn = self.conn.borrow();

        let (row_count, min_date, max_date) = conn.query_row(
            "SELECT COUNT(*), MIN(date), MAX(date) FROM mobility",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )?;
        let (Some(min_date), Some(max_date)) = (min_date, max_date) else {
            anyhow::bail!("dataset is empty");
        };

        let mut stmt = conn.prepare(
            "SELECT state, county FROM mobility
             GROUP BY state, county
             ORDER BY MIN(id)",
        )?;
        let pairs = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut states: Vec<String> = Vec::new();
        let mut counties: HashMap<String, Vec<String>> = HashMap::new();
        for (state, county) in pairs {
            let entry = counties.entry(state.clone()).or_insert_with(|| {
                states.push(state);
                Vec::new()
            });
            entry.push(county);
        }

        let catalog = Catalog {
            states,
            counties,
            min_date: parse_stored_date(1, &min_date)?,
            max_date: parse_stored_date(2, &max_date)?,
            row_count: row_count as usize,
        };
        log::info!(
            "[HMD] query: query_catalog found {} states, {} rows, {} to {}",
            catalog.states.len(),
            catalog.row_count,
            min_date,
            max_date
        );
        Ok(catalog)
    }

    /// Get the filtered subset for a selection: exact state and county match,
    /// date within `[start, end]` inclusive, ordered by date then file order.
    ///
    /// An inverted range (`start > end`) returns an empty Vec.
    pub fn query_filtered(&self, selection: &FilterSelection) -> anyhow::Result<Vec<MobilityRecord>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {} FROM mobility
             WHERE state = ?1 AND county = ?2 AND date >= ?3 AND date <= ?4
             ORDER BY date, id",
            RECORD_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![
                    selection.state,
                    selection.county,
                    format_date(&selection.start),
                    format_date(&selection.end)
                ],
                record_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HMD] query: query_filtered returned {} records for {}, {}",
            rows.len(),
            selection.county,
            selection.state
        );
        Ok(rows)
    }

    /// Get every record in file order.
    pub fn query_all(&self) -> anyhow::Result<Vec<MobilityRecord>> {
        let conn = self.conn.borrow();
        let sql = format!("SELECT {} FROM mobility ORDER BY id", RECORD_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Get the mean of `metric` per state over the full dataset, sorted
    /// descending (ties broken by state name).
    ///
    /// Missing values are skipped by `AVG`; states with no values at all
    /// for the metric are left out.
    pub fn query_state_means(&self, metric: Metric) -> anyhow::Result<Vec<StateMean>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT state, AVG({col}) AS mean FROM mobility
             GROUP BY state
             HAVING mean IS NOT NULL
             ORDER BY mean DESC, state",
            col = metric_column(metric)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StateMean {
                    state: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HMD] query: query_state_means({}) returned {} states",
            metric,
            rows.len()
        );
        Ok(rows)
    }
}
