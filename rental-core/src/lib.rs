//! Record types and CSV loaders for farm machine rental data.
//!
//! Two source files feed the dashboard:
//!
//! - `merged_rental_weather.csv`: `machine,rental_date,count,rainfall`
//! - `machine_monthly_predictions.csv`: `year_month,machine,predicted_count,rainfall,temperature`
//!
//! [`loader`] turns either file into typed records and [`distinct`] derives
//! the machine and year lists the selectors offer.

pub mod distinct;
pub mod loader;
pub mod record;

/// File name of the actual rentals joined with observed rainfall.
pub const MERGED_RENTAL_WEATHER_CSV: &str = "merged_rental_weather.csv";

/// File name of the per-machine monthly forecasts.
pub const MACHINE_MONTHLY_PREDICTIONS_CSV: &str = "machine_monthly_predictions.csv";
