//! Command implementations for the mobility dashboard CLI.
//!
//! Provides subcommands that load the dataset headlessly, summarize its
//! catalog, and preview any of the seven analyses as text.

use chrono::NaiveDate;
use clap::Subcommand;
use hmd_core::dates::parse_dataset_date;
use hmd_core::{AnalysisMode, Metric};

pub mod preview;
pub mod summary;

/// Dataset path used when `--data` is not given.
pub const DEFAULT_DATA_PATH: &str = "clean_data.csv";

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_dataset_date(s).ok_or_else(|| format!("invalid date: {}", s))
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the dataset's states, counties and date range
    Summary {
        /// Path to the mobility dataset CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Run one analysis for a selection and print the result
    Preview {
        /// Path to the mobility dataset CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// State to filter on (defaults to the first state in the dataset)
        #[arg(short = 's', long)]
        state: Option<String>,

        /// County to filter on (defaults to the first county of the state)
        #[arg(short = 'c', long)]
        county: Option<String>,

        /// Start date, inclusive (defaults to the earliest date)
        #[arg(long, value_parser = parse_date_arg)]
        start: Option<NaiveDate>,

        /// End date, inclusive (defaults to the latest date)
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<NaiveDate>,

        /// Analysis to run: linegraph, best-worst, rolling, correlation,
        /// year-over-year, daily-change or category-comparison
        #[arg(short = 'a', long, default_value = "linegraph")]
        analysis: AnalysisMode,

        /// Metric for single-metric analyses
        #[arg(short = 'm', long)]
        metric: Option<Metric>,

        /// Rolling average window in days, clamped to 3..=30
        #[arg(short = 'w', long)]
        window: Option<u32>,

        /// Comma-separated metrics for Category Comparison
        #[arg(long, value_delimiter = ',')]
        categories: Vec<Metric>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data } => summary::run_summary(&data),
        Command::Preview {
            data,
            state,
            county,
            start,
            end,
            analysis,
            metric,
            window,
            categories,
        } => {
            let request = preview::PreviewRequest {
                state,
                county,
                start,
                end,
                analysis,
                metric,
                window,
                categories,
            };
            preview::run_preview(&data, &request)
        }
    }
}
