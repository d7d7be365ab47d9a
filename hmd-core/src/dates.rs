//! Date parsing for the dataset's `Date` column.

use chrono::{NaiveDate, NaiveDateTime};

/// Canonical storage and display format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only layouts accepted in the `Date` column, tried in order.
const DATE_LAYOUTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

/// Date-time layouts accepted in the `Date` column; the time part is dropped.
const DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a dataset date cell, accepting the common layouts the dataset is
/// exported with. Returns `None` when no layout matches.
pub fn parse_dataset_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
        .or_else(|| {
            DATE_TIME_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
                .map(|dt| dt.date())
        })
}

/// Clamp a date into `[min, max]`.
pub fn clamp_date(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    date.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_layouts() {
        let expected = ymd(2021, 3, 7);
        assert_eq!(parse_dataset_date("2021-03-07"), Some(expected));
        assert_eq!(parse_dataset_date("2021/03/07"), Some(expected));
        assert_eq!(parse_dataset_date("03/07/2021"), Some(expected));
        assert_eq!(parse_dataset_date("20210307"), Some(expected));
        assert_eq!(parse_dataset_date("2021-03-07 00:00:00"), Some(expected));
        assert_eq!(parse_dataset_date(" 2021-03-07 "), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_dataset_date("yesterday"), None);
        assert_eq!(parse_dataset_date("2021-13-01"), None);
        assert_eq!(parse_dataset_date(""), None);
    }

    #[test]
    fn format_uses_iso_layout() {
        assert_eq!(format_date(&ymd(2020, 2, 29)), "2020-02-29");
    }

    #[test]
    fn clamp_keeps_dates_in_bounds() {
        let min = ymd(2020, 1, 1);
        let max = ymd(2020, 12, 31);
        assert_eq!(clamp_date(ymd(2019, 6, 1), min, max), min);
        assert_eq!(clamp_date(ymd(2021, 6, 1), min, max), max);
        assert_eq!(clamp_date(ymd(2020, 6, 1), min, max), ymd(2020, 6, 1));
    }
}
