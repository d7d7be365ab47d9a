//! `summary`: print what the dataset offers to the selectors.

use hmd_core::Catalog;
use hmd_db::Database;
use log::info;
use std::fmt::Write;

/// Load the dataset at `data_path` and print its catalog.
pub fn run_summary(data_path: &str) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_mobility_file(data_path)?;
    let catalog = db.query_catalog()?;
    info!("Summarizing {}", data_path);
    print!("{}", format_summary(&catalog));
    Ok(())
}

/// Render the catalog as plain text, one state per line.
pub fn format_summary(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Records: {}", catalog.row_count);
    let _ = writeln!(out, "Date range: {} to {}", catalog.min_date, catalog.max_date);
    let _ = writeln!(out, "States: {}", catalog.states.len());
    for state in &catalog.states {
        let counties = catalog.counties_for(state);
        let _ = writeln!(
            out,
            "  {} ({} counties): {}",
            state,
            counties.len(),
            counties.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_states_in_order() {
        let db = Database::new().unwrap();
        db.load_mobility(
            "\
Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential
2021-01-01,TX,Travis,1,1,1,1,1,1
2021-01-01,CA,Los Angeles,1,1,1,1,1,1
2021-01-05,TX,Harris,1,1,1,1,1,1
",
        )
        .unwrap();
        let text = format_summary(&db.query_catalog().unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Records: 3");
        assert_eq!(lines[1], "Date range: 2021-01-01 to 2021-01-05");
        assert_eq!(lines[2], "States: 2");
        assert_eq!(lines[3], "  TX (2 counties): Travis, Harris");
        assert_eq!(lines[4], "  CA (1 counties): Los Angeles");
    }

    #[test]
    fn summary_of_missing_file_fails() {
        assert!(run_summary("/nonexistent/hmd/clean_data.csv").is_err());
    }
}
