use crate::metric::Metric;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the mobility dataset.
///
/// Metric values are signed percentage changes from baseline. A `None`
/// value is a gap in the source data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobilityRecord {
    pub date: NaiveDate,
    pub state: String,
    pub county: String,
    pub retail_recreation: Option<f64>,
    pub grocery_pharmacy: Option<f64>,
    pub parks: Option<f64>,
    pub transit: Option<f64>,
    pub workplace: Option<f64>,
    pub residential: Option<f64>,
}

impl MobilityRecord {
    /// Value of the given metric for this row.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::RetailRecreation => self.retail_recreation,
            Metric::GroceryPharmacy => self.grocery_pharmacy,
            Metric::Parks => self.parks,
            Metric::Transit => self.transit,
            Metric::Workplace => self.workplace,
            Metric::Residential => self.residential,
        }
    }

    /// All six metric values in [`Metric::ALL`] order.
    pub fn values(&self) -> [Option<f64>; 6] {
        Metric::ALL.map(|m| self.value(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_reads_matching_field() {
        let record = MobilityRecord {
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            state: "CA".to_string(),
            county: "Los Angeles".to_string(),
            retail_recreation: Some(-10.0),
            grocery_pharmacy: Some(-2.5),
            parks: None,
            transit: Some(-30.0),
            workplace: Some(-25.0),
            residential: Some(8.0),
        };
        assert_eq!(record.value(Metric::RetailRecreation), Some(-10.0));
        assert_eq!(record.value(Metric::Parks), None);
        assert_eq!(
            record.values(),
            [Some(-10.0), Some(-2.5), None, Some(-30.0), Some(-25.0), Some(8.0)]
        );
    }
}
