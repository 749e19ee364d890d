//! CSV loading functions for rental, merged weather and forecast data.
//!
//! Each loader parses CSV data from a string slice. Columns are located by
//! header name so their order in the file does not matter; a missing
//! required column is an error. Blank lines are skipped by the CSV reader.
//!
//! Rows that fail presence or number/date checks are skipped and counted
//! rather than carried into aggregation as invalid values.
//!
//! # CSV Formats
//!
//! - **Merged rentals** (has headers): `machine,rental_date,count,rainfall`
//! - **Forecasts** (has headers): `year_month,machine,predicted_count,rainfall,temperature`

use crate::record::{ForecastRecord, RentalRecord, WeatherMergedRecord};
use anyhow::anyhow;
use csv::StringRecord;
use rental_utils::dates::parse_rental_date;

pub const COL_MACHINE: &str = "machine";
pub const COL_RENTAL_DATE: &str = "rental_date";
pub const COL_COUNT: &str = "count";
pub const COL_RAINFALL: &str = "rainfall";
pub const COL_YEAR_MONTH: &str = "year_month";
pub const COL_PREDICTED_COUNT: &str = "predicted_count";
pub const COL_TEMPERATURE: &str = "temperature";

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

/// Position of the column named `name` in the header row.
fn column_index(headers: &StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| anyhow!("missing column '{}'", name))
}

/// Non-empty field value, untrimmed.
fn present(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|s| !s.trim().is_empty())
}

/// Parse a count cell. Integral floats such as "3.0" are accepted.
fn parse_count(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(count) = s.parse::<u32>() {
        return Some(count);
    }
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Parse a numeric cell that is required to be present.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a weather cell. An empty cell reads as `0.0`; a non-numeric one is invalid.
fn parse_weather(cell: Option<&str>) -> Option<f64> {
    match cell.map(str::trim) {
        None | Some("") => Some(0.0),
        Some(s) => parse_number(s),
    }
}

struct RentalColumns {
    machine: usize,
    date: usize,
    count: usize,
}

impl RentalColumns {
    fn locate(headers: &StringRecord) -> anyhow::Result<Self> {
        Ok(Self {
            machine: column_index(headers, COL_MACHINE)?,
            date: column_index(headers, COL_RENTAL_DATE)?,
            count: column_index(headers, COL_COUNT)?,
        })
    }

    fn read(&self, r: &StringRecord) -> Option<RentalRecord> {
        let machine = present(r, self.machine)?;
        let date = parse_rental_date(present(r, self.date)?).ok()?;
        let count = parse_count(present(r, self.count)?)?;
        Some(RentalRecord {
            machine: machine.to_string(),
            date,
            count,
        })
    }
}

struct ForecastColumns {
    year_month: usize,
    machine: usize,
    predicted_count: usize,
    rainfall: usize,
    temperature: usize,
}

impl ForecastColumns {
    fn locate(headers: &StringRecord) -> anyhow::Result<Self> {
        Ok(Self {
            year_month: column_index(headers, COL_YEAR_MONTH)?,
            machine: column_index(headers, COL_MACHINE)?,
            predicted_count: column_index(headers, COL_PREDICTED_COUNT)?,
            rainfall: column_index(headers, COL_RAINFALL)?,
            temperature: column_index(headers, COL_TEMPERATURE)?,
        })
    }

    fn read(&self, r: &StringRecord) -> Option<ForecastRecord> {
        Some(ForecastRecord {
            year_month: present(r, self.year_month)?.to_string(),
            machine: present(r, self.machine)?.to_string(),
            predicted_count: parse_number(present(r, self.predicted_count)?)?,
            rainfall: parse_weather(r.get(self.rainfall))?,
            temperature: parse_weather(r.get(self.temperature))?,
        })
    }
}

/// Load actual rental records from CSV string.
///
/// Reads the `machine`, `rental_date` and `count` columns; any other column
/// (such as `rainfall` in the merged file) is ignored.
///
/// # Example CSV
/// ```text
/// machine,rental_date,count,rainfall
/// 이앙기,2023-03-15,5,2.0
/// ```
pub fn parse_rental_csv(csv_data: &str) -> anyhow::Result<Vec<RentalRecord>> {
    let mut rdr = reader(csv_data);
    let columns = RentalColumns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        match columns.read(&r) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    log::info!("loader: Loaded {} rental records, skipped {} malformed", records.len(), skipped);
    Ok(records)
}

/// Load rental records joined with rainfall from CSV string.
///
/// An empty `rainfall` cell is read as `0.0`; a non-numeric one skips the row.
///
/// # Example CSV
/// ```text
/// machine,rental_date,count,rainfall
/// 이앙기,2023-03-15,5,2.0
/// 이앙기,2023-03-20,3,
/// ```
pub fn parse_merged_csv(csv_data: &str) -> anyhow::Result<Vec<WeatherMergedRecord>> {
    let mut rdr = reader(csv_data);
    let headers = rdr.headers()?.clone();
    let columns = RentalColumns::locate(&headers)?;
    let rainfall_idx = column_index(&headers, COL_RAINFALL)?;

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let merged = columns.read(&r).and_then(|rental| {
            parse_weather(r.get(rainfall_idx)).map(|rainfall| WeatherMergedRecord { rental, rainfall })
        });
        match merged {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    log::info!("loader: Loaded {} merged rental records, skipped {} malformed", records.len(), skipped);
    Ok(records)
}

/// Load monthly forecast records from CSV string.
///
/// `year_month`, `machine` and `predicted_count` must be present; empty
/// weather cells read as `0.0`. The `year_month` key is kept as written and
/// only interpreted during aggregation.
///
/// # Example CSV
/// ```text
/// year_month,machine,predicted_count,rainfall,temperature
/// 2024-07,트랙터,12.5,30.2,26.1
/// ```
pub fn parse_forecast_csv(csv_data: &str) -> anyhow::Result<Vec<ForecastRecord>> {
    let mut rdr = reader(csv_data);
    let columns = ForecastColumns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        match columns.read(&r) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    log::info!("loader: Loaded {} forecast records, skipped {} malformed", records.len(), skipped);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const MERGED_CSV: &str = "\
machine,rental_date,count,rainfall
이앙기,2023-03-15,5,2.0
이앙기,2023-03-20,3,4.0

트랙터,2023-04-01,2,
";

    #[test]
    fn parse_rental_csv_reads_rows_and_skips_blank_lines() {
        let records = parse_rental_csv(MERGED_CSV).unwrap();
        assert_eq!(records.len(), 3, "Blank line should not produce a record");
        assert_eq!(records[0].machine, "이앙기");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(records[0].count, 5);
        assert_eq!(records[2].machine, "트랙터");
    }

    #[test]
    fn parse_merged_csv_defaults_empty_rainfall() {
        let records = parse_merged_csv(MERGED_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].rainfall, 4.0);
        assert_eq!(records[2].rainfall, 0.0, "Empty rainfall should read as 0.0");
    }

    #[test]
    fn columns_are_found_by_name() {
        let csv = "\
rainfall,count,machine,rental_date
1.5,7,콤바인,2022-10-03
";
        let records = parse_merged_csv(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rental.machine, "콤바인");
        assert_eq!(records[0].rental.count, 7);
        assert_eq!(records[0].rainfall, 1.5);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "machine,count\n이앙기,5\n";
        let err = parse_rental_csv(csv).unwrap_err();
        assert!(err.to_string().contains("rental_date"), "Error should name the column: {}", err);
        assert!(parse_merged_csv(csv).is_err());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv = "\
machine,rental_date,count,rainfall
이앙기,2023-03-15,5,2.0
이앙기,someday,3,1.0
이앙기,2023-03-16,many,1.0
,2023-03-17,1,1.0
이앙기,2023-03-18,-2,1.0
이앙기,2023-03-19,4.0,wet
이앙기,2023-03-20,6.0,0.5
";
        let rentals = parse_rental_csv(csv).unwrap();
        let counts: Vec<u32> = rentals.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![5, 4, 6], "Rental loader ignores the rainfall column");

        let merged = parse_merged_csv(csv).unwrap();
        let counts: Vec<u32> = merged.iter().map(|r| r.rental.count).collect();
        assert_eq!(counts, vec![5, 6], "Non-numeric rainfall skips the row");
    }

    #[test]
    fn machine_names_are_kept_verbatim() {
        let csv = "machine,rental_date,count\n 트랙터 ,2023-01-01,1\n";
        let records = parse_rental_csv(csv).unwrap();
        assert_eq!(records[0].machine, " 트랙터 ");
    }

    #[test]
    fn parse_forecast_csv_reads_rows() {
        let csv = "\
year_month,machine,predicted_count,rainfall,temperature
2024-07,트랙터,12.5,30.2,26.1
2024-08,트랙터,9,,27.4
2024-09,트랙터,,10.0,22.0
";
        let records = parse_forecast_csv(csv).unwrap();
        assert_eq!(records.len(), 2, "Row without predicted_count should be skipped");
        assert_eq!(records[0].year_month, "2024-07");
        assert_eq!(records[0].predicted_count, 12.5);
        assert_eq!(records[0].rainfall, 30.2);
        assert_eq!(records[0].temperature, 26.1);
        assert_eq!(records[1].predicted_count, 9.0);
        assert_eq!(records[1].rainfall, 0.0);
    }

    #[test]
    fn forecast_columns_are_found_by_name() {
        let headers = StringRecord::from(vec!["temperature", "machine", "rainfall", "predicted_count", "year_month"]);
        let columns = ForecastColumns::locate(&headers).unwrap();

        let row = StringRecord::from(vec!["26.1", "트랙터", "30.2", "12.5", "2024-07"]);
        let record = columns.read(&row).unwrap();
        assert_eq!(record.year_month, "2024-07");
        assert_eq!(record.machine, "트랙터");
        assert_eq!(record.predicted_count, 12.5);
        assert_eq!(record.rainfall, 30.2);
        assert_eq!(record.temperature, 26.1);

        let bad_temperature = StringRecord::from(vec!["warm", "트랙터", "30.2", "12.5", "2024-07"]);
        assert!(columns.read(&bad_temperature).is_none());

        let short_row = StringRecord::from(vec!["26.1", "트랙터"]);
        assert!(columns.read(&short_row).is_none());

        let missing = StringRecord::from(vec!["machine", "predicted_count", "rainfall", "temperature"]);
        assert!(ForecastColumns::locate(&missing).is_err());
    }

    #[test]
    fn empty_input_is_an_error_but_header_only_is_empty() {
        assert!(parse_forecast_csv("").is_err(), "No header row means no columns");
        let records =
            parse_forecast_csv("year_month,machine,predicted_count,rainfall,temperature\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let csv = "\u{feff}machine,rental_date,count\n이앙기,2023-05-01,2\n";
        let records = parse_rental_csv(csv).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_count_accepts_integral_floats() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 3.0 "), Some(3));
        assert_eq!(parse_count("3.5"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("NaN"), None);
    }
}
