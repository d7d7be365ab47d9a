//! SQL schema for the in-memory SQLite database.

use hmd_core::Metric;

/// Returns the full SQL schema as a single batch string.
///
/// One table, `mobility`, holds every dataset row. `id` preserves file order
/// so that option lists can follow first appearance. Metric columns are
/// nullable because the dataset has gaps.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS mobility (
        id INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        state TEXT NOT NULL,
        county TEXT NOT NULL,
        retail_recreation REAL,
        grocery_pharmacy REAL,
        parks REAL,
        transit REAL,
        workplace REAL,
        residential REAL
    );
    CREATE INDEX IF NOT EXISTS idx_mobility_state_county ON mobility(state, county);
    CREATE INDEX IF NOT EXISTS idx_mobility_date ON mobility(date);
    "#
}

/// SQL column holding `metric`.
///
/// Only ever returns one of the fixed column names above, so the result is
/// safe to splice into a query string.
pub fn metric_column(metric: Metric) -> &'static str {
    match metric {
        Metric::RetailRecreation => "retail_recreation",
        Metric::GroceryPharmacy => "grocery_pharmacy",
        Metric::Parks => "parks",
        Metric::Transit => "transit",
        Metric::Workplace => "workplace",
        Metric::Residential => "residential",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in ["idx_mobility_state_county", "idx_mobility_date"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?1",
                    [idx],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn every_metric_has_a_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        for metric in Metric::ALL {
            let sql = format!("SELECT {} FROM mobility", metric_column(metric));
            conn.prepare(&sql)
                .unwrap_or_else(|e| panic!("column for {} should exist: {}", metric, e));
        }
    }
}
