use chrono::{Datelike, NaiveDate};
use rental_utils::dates::parse_year_month;
use serde::Serialize;

/// A record that belongs to one machine type and (usually) one calendar year.
///
/// Implemented by every record type so distinct-value derivation and
/// selection reconciliation work the same way for actual and forecast data.
pub trait MachineRecord {
    fn machine(&self) -> &str;

    /// Calendar year of the record, or `None` when it cannot be derived.
    fn year(&self) -> Option<i32>;
}

/// One observed rental count for a machine on a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalRecord {
    /// Machine type label, kept exactly as it appears in the CSV.
    pub machine: String,
    pub date: NaiveDate,
    pub count: u32,
}

impl RentalRecord {
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

impl AsRef<RentalRecord> for RentalRecord {
    fn as_ref(&self) -> &RentalRecord {
        self
    }
}

impl MachineRecord for RentalRecord {
    fn machine(&self) -> &str {
        &self.machine
    }

    fn year(&self) -> Option<i32> {
        Some(self.date.year())
    }
}

/// A rental record joined with the rainfall observed on its date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherMergedRecord {
    #[serde(flatten)]
    pub rental: RentalRecord,
    /// Rainfall in millimetres.
    pub rainfall: f64,
}

impl AsRef<RentalRecord> for WeatherMergedRecord {
    fn as_ref(&self) -> &RentalRecord {
        &self.rental
    }
}

impl MachineRecord for WeatherMergedRecord {
    fn machine(&self) -> &str {
        &self.rental.machine
    }

    fn year(&self) -> Option<i32> {
        self.rental.year()
    }
}

/// A predicted monthly rental count with forecast weather covariates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    /// "YYYY-MM" key, kept as written.
    pub year_month: String,
    pub machine: String,
    pub predicted_count: f64,
    /// Forecast rainfall in millimetres.
    pub rainfall: f64,
    /// Forecast temperature in °C.
    pub temperature: f64,
}

impl ForecastRecord {
    /// `(year, month)` parsed from the `year_month` key.
    pub fn year_month_parts(&self) -> Option<(i32, u32)> {
        parse_year_month(&self.year_month).ok()
    }
}

impl MachineRecord for ForecastRecord {
    fn machine(&self) -> &str {
        &self.machine
    }

    fn year(&self) -> Option<i32> {
        self.year_month_parts().map(|(year, _)| year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(machine: &str, date: &str, count: u32) -> RentalRecord {
        RentalRecord {
            machine: machine.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            count,
        }
    }

    #[test]
    fn rental_record_exposes_year_and_month() {
        let record = rental("이앙기", "2023-03-15", 5);
        assert_eq!(MachineRecord::year(&record), Some(2023));
        assert_eq!(record.month(), 3);
        assert_eq!(record.machine(), "이앙기");
    }

    #[test]
    fn merged_record_delegates_to_rental() {
        let merged = WeatherMergedRecord {
            rental: rental("트랙터", "2022-11-02", 1),
            rainfall: 4.5,
        };
        assert_eq!(merged.as_ref().count, 1);
        assert_eq!(MachineRecord::year(&merged), Some(2022));
        assert_eq!(merged.machine(), "트랙터");
    }

    #[test]
    fn forecast_year_comes_from_key() {
        let mut forecast = ForecastRecord {
            year_month: "2024-07".to_string(),
            machine: "트랙터".to_string(),
            predicted_count: 12.5,
            rainfall: 30.2,
            temperature: 26.1,
        };
        assert_eq!(forecast.year_month_parts(), Some((2024, 7)));
        assert_eq!(MachineRecord::year(&forecast), Some(2024));

        forecast.year_month = "July 2024".to_string();
        assert_eq!(forecast.year_month_parts(), None);
        assert_eq!(MachineRecord::year(&forecast), None);
    }
}
