//! CSV loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Header row required. Columns are located by exact header name:
//! `Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential`.
//! Extra columns are ignored and column order does not matter.
//!
//! Empty or non-numeric metric cells are stored as NULL (gaps). A `Date` cell
//! that does not parse is fatal.

use crate::schema::metric_column;
use crate::Database;
use hmd_core::dates::{format_date, parse_dataset_date};
use hmd_core::error::LoadError;
use hmd_core::Metric;
use rusqlite::params;
use std::path::Path;

/// Column indices of the required fields within a CSV header.
struct ColumnMap {
    date: usize,
    state: usize,
    county: usize,
    metrics: [usize; 6],
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        let mut metrics = [0usize; 6];
        for metric in Metric::ALL {
            metrics[metric.index()] = find(metric.column())?;
        }
        Ok(Self {
            date: find("Date")?,
            state: find("State")?,
            county: find("County")?,
            metrics,
        })
    }
}

/// Parse a metric cell; blanks, text and non-finite numbers are gaps.
fn parse_metric(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl Database {
    /// Load the mobility dataset from a CSV string.
    ///
    /// Returns the number of rows loaded. Fails with a [`LoadError`] when a
    /// required column is missing, a date does not parse, or there are no rows.
    ///
    /// # Example CSV
    /// ```text
    /// Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential
    /// 2021-01-01,CA,Los Angeles,-20,-5,10,-40,-30,9
    /// ```
    pub fn load_mobility(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let columns = ColumnMap::from_headers(rdr.headers().map_err(LoadError::from)?)?;

        let insert_sql = format!(
            "INSERT INTO mobility (date, state, county, {}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            Metric::ALL.map(metric_column).join(", ")
        );

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut count = 0usize;
        let mut gaps = 0usize;
        {
            let mut stmt = tx.prepare(&insert_sql)?;
            for result in rdr.records() {
                let r = result.map_err(LoadError::from)?;
                let raw_date = r.get(columns.date).unwrap_or("");
                let date = parse_dataset_date(raw_date).ok_or_else(|| LoadError::DateParse {
                    line: r.position().map(|p| p.line()).unwrap_or(0),
                    value: raw_date.to_string(),
                })?;
                let state = r.get(columns.state).unwrap_or("").trim();
                let county = r.get(columns.county).unwrap_or("").trim();
                let values = columns.metrics.map(|idx| parse_metric(r.get(idx)));
                gaps += values.iter().filter(|v| v.is_none()).count();

                stmt.execute(params![
                    format_date(&date),
                    state,
                    county,
                    values[0],
                    values[1],
                    values[2],
                    values[3],
                    values[4],
                    values[5],
                ])?;
                count += 1;
            }
        }
        if count == 0 {
            return Err(LoadError::EmptyDataset.into());
        }
        tx.commit()?;
        log::info!(
            "[HMD] loader: Loaded {} records, {} missing metric values",
            count,
            gaps
        );
        Ok(count)
    }

    /// Read the dataset from `path` and load it. A missing file is fatal.
    pub fn load_mobility_file(&self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        log::info!("[HMD] loader: Reading {}", path.display());
        let data = std::fs::read_to_string(path).map_err(LoadError::from)?;
        self.load_mobility(&data)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use hmd_core::error::LoadError;

    const HEADER: &str =
        "Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential";

    fn count_rows(db: &Database) -> i64 {
        db.conn
            .borrow()
            .query_row("SELECT COUNT(*) FROM mobility", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_mobility_from_csv() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}\n2021-01-01,CA,Los Angeles,-20,-5,10,-40,-30,9\n2021-01-02,CA,Orange,-18.5,-4,12,-38,-29,8\n",
            HEADER
        );
        assert_eq!(db.load_mobility(&csv).unwrap(), 2);
        assert_eq!(count_rows(&db), 2);

        let retail: f64 = db
            .conn
            .borrow()
            .query_row(
                "SELECT retail_recreation FROM mobility WHERE county = 'Orange'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((retail - -18.5).abs() < 1e-9);
    }

    #[test]
    fn load_mobility_normalizes_dates() {
        let db = Database::new().unwrap();
        let csv = format!("{}\n01/15/2021,CA,Los Angeles,1,2,3,4,5,6\n", HEADER);
        db.load_mobility(&csv).unwrap();
        let date: String = db
            .conn
            .borrow()
            .query_row("SELECT date FROM mobility", [], |row| row.get(0))
            .unwrap();
        assert_eq!(date, "2021-01-15");
    }

    #[test]
    fn load_mobility_finds_columns_by_name() {
        let db = Database::new().unwrap();
        let csv = "\
Residential,County,Extra,State,Date,Parks,Transit,Workplace,Grocery_Pharmacy,Retail_recreation
9,Los Angeles,x,CA,2021-01-01,10,-40,-30,-5,-20
";
        db.load_mobility(csv).unwrap();
        let (state, residential, retail): (String, f64, f64) = db
            .conn
            .borrow()
            .query_row(
                "SELECT state, residential, retail_recreation FROM mobility",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(state, "CA");
        assert!((residential - 9.0).abs() < 1e-9);
        assert!((retail - -20.0).abs() < 1e-9);
    }

    #[test]
    fn load_mobility_stores_gaps_as_null() {
        let db = Database::new().unwrap();
        let csv = format!("{}\n2021-01-01,CA,Los Angeles,,NA,nan,-40,-30,9\n", HEADER);
        db.load_mobility(&csv).unwrap();
        let nulls: i64 = db
            .conn
            .borrow()
            .query_row(
                "SELECT COUNT(*) FROM mobility
                 WHERE retail_recreation IS NULL AND grocery_pharmacy IS NULL AND parks IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1, "Blank, text and NaN cells should all be gaps");
    }

    #[test]
    fn load_mobility_rejects_missing_column() {
        let db = Database::new().unwrap();
        let csv = "Date,State,County,Parks\n2021-01-01,CA,Los Angeles,10\n";
        let err = db.load_mobility(csv).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn(name)) => assert_eq!(name, "Retail_recreation"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn load_mobility_rejects_bad_date() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{}\n2021-01-01,CA,Los Angeles,1,2,3,4,5,6\nnot-a-date,CA,Los Angeles,1,2,3,4,5,6\n",
            HEADER
        );
        let err = db.load_mobility(&csv).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::DateParse { line, value }) => {
                assert_eq!(*line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected DateParse, got {:?}", other),
        }
        assert_eq!(count_rows(&db), 0, "A failed load should leave no rows behind");
    }

    #[test]
    fn load_mobility_rejects_empty_dataset() {
        let db = Database::new().unwrap();
        let err = db.load_mobility(&format!("{}\n", HEADER)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::EmptyDataset)
        ));

        let err = db.load_mobility("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingColumn(_))
        ));
    }

    #[test]
    fn load_mobility_file_missing_is_io_error() {
        let db = Database::new().unwrap();
        let err = db
            .load_mobility_file("/nonexistent/hmd/clean_data.csv")
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::Io(_))));
    }
}
