//! Distinct machine and year lists offered by the selectors.

use crate::record::MachineRecord;
use std::collections::BTreeSet;

/// Sorted, deduplicated machine labels.
pub fn distinct_machines<R: MachineRecord>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.machine())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted, deduplicated calendar years. Records without a derivable year are ignored.
pub fn distinct_years<R: MachineRecord>(records: &[R]) -> Vec<i32> {
    records
        .iter()
        .filter_map(|r| r.year())
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ForecastRecord, RentalRecord};
    use chrono::NaiveDate;

    fn rental(machine: &str, year: i32) -> RentalRecord {
        RentalRecord {
            machine: machine.to_string(),
            date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            count: 1,
        }
    }

    #[test]
    fn machines_are_sorted_and_unique() {
        let records = vec![rental("A", 2022), rental("C", 2022), rental("B", 2023), rental("A", 2023)];
        assert_eq!(distinct_machines(&records), vec!["A", "B", "C"]);
    }

    #[test]
    fn years_are_sorted_and_unique() {
        let records = vec![rental("A", 2024), rental("A", 2021), rental("B", 2024)];
        assert_eq!(distinct_years(&records), vec![2021, 2024]);
    }

    #[test]
    fn forecast_years_skip_bad_keys() {
        let forecast = |ym: &str| ForecastRecord {
            year_month: ym.to_string(),
            machine: "트랙터".to_string(),
            predicted_count: 1.0,
            rainfall: 0.0,
            temperature: 0.0,
        };
        let records = vec![forecast("2025-01"), forecast("bad"), forecast("2024-12")];
        assert_eq!(distinct_years(&records), vec![2024, 2025]);
        assert_eq!(distinct_machines(&records), vec!["트랙터"]);
    }

    #[test]
    fn empty_input_gives_empty_lists() {
        let records: Vec<RentalRecord> = Vec::new();
        assert!(distinct_machines(&records).is_empty());
        assert!(distinct_years(&records).is_empty());
    }
}
