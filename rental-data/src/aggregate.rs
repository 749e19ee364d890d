//! Month bucketing for the three chart series.
//!
//! Every aggregator returns exactly [`MONTHS`] points, months 1 through 12 in
//! order. All slots start at their zero value and are then overwritten from
//! the records that match the selection, so months without data still appear.
//!
//! Duplicate (year, month, machine) keys: the actual-rental series sum every
//! matching record, the forecast series keeps the first match in file order.

use crate::selection::Selection;
use crate::MONTHS;
use rental_core::record::{ForecastRecord, MachineRecord, RentalRecord, WeatherMergedRecord};
use serde::Serialize;

/// A fixed 12-slot series, index 0 = January.
pub type MonthlySeries<T> = [T; MONTHS];

/// Actual rental count for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub month: u32,
    pub count: u64,
}

/// Actual rental count and average rainfall (mm) for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRentalWeather {
    pub month: u32,
    pub count: u64,
    /// Mean rainfall of the matching records, rounded to one decimal.
    pub avg_rain: f64,
}

/// Forecast rental count and forecast weather for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    pub month: u32,
    pub forecast_count: f64,
    pub rainfall: f64,
    pub temperature: f64,
}

fn empty_series<T>(empty: impl Fn(u32) -> T) -> MonthlySeries<T> {
    std::array::from_fn(|i| empty(i as u32 + 1))
}

fn slot(month: u32) -> usize {
    month as usize - 1
}

fn selects<R: MachineRecord>(selection: &Selection, record: &R) -> bool {
    record
        .year()
        .is_some_and(|year| selection.matches(record.machine(), year))
}

/// Round to one decimal place, like JavaScript's `toFixed(1)`.
///
/// The exact decimal value of the double is rounded, so a mean such as
/// 0.34999999999999997 goes down to 0.3. Exact ties (x.25, x.75) round away
/// from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Sum of rental counts per month for the selected year and machine.
pub fn monthly_counts<R: AsRef<RentalRecord>>(
    records: &[R],
    selection: &Selection,
) -> MonthlySeries<MonthlyCount> {
    let mut series = empty_series(|month| MonthlyCount { month, count: 0 });
    for rental in records.iter().map(AsRef::as_ref) {
        if selects(selection, rental) {
            series[slot(rental.month())].count += u64::from(rental.count);
        }
    }
    series
}

/// Sum of rental counts and mean rainfall per month for the selected year and machine.
pub fn monthly_rental_weather(
    records: &[WeatherMergedRecord],
    selection: &Selection,
) -> MonthlySeries<MonthlyRentalWeather> {
    let mut series = empty_series(|month| MonthlyRentalWeather {
        month,
        count: 0,
        avg_rain: 0.0,
    });
    let mut rain: MonthlySeries<(f64, u32)> = [(0.0, 0); MONTHS];

    for record in records {
        if !selects(selection, record) {
            continue;
        }
        let idx = slot(record.rental.month());
        series[idx].count += u64::from(record.rental.count);
        rain[idx].0 += record.rainfall;
        rain[idx].1 += 1;
    }

    for (point, (total, n)) in series.iter_mut().zip(rain) {
        if n > 0 {
            point.avg_rain = round_one_decimal(total / f64::from(n));
        }
    }
    series
}

/// Forecast values per month for the selected year and machine.
///
/// Only the first matching record of each month is used.
pub fn monthly_forecast(
    records: &[ForecastRecord],
    selection: &Selection,
) -> MonthlySeries<MonthlyForecast> {
    let mut series = empty_series(|month| MonthlyForecast {
        month,
        forecast_count: 0.0,
        rainfall: 0.0,
        temperature: 0.0,
    });
    let mut filled = [false; MONTHS];

    for record in records {
        let Some((year, month)) = record.year_month_parts() else {
            continue;
        };
        let idx = slot(month);
        if filled[idx] || !selection.matches(&record.machine, year) {
            continue;
        }
        series[idx].forecast_count = record.predicted_count;
        series[idx].rainfall = record.rainfall;
        series[idx].temperature = record.temperature;
        filled[idx] = true;
    }
    series
}
