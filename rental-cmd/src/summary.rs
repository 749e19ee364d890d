//! Series and selector lists derived from one loaded source.

use crate::source::read_source;
use crate::Dataset;
use anyhow::Context;
use rental_core::distinct::{distinct_machines, distinct_years};
use rental_core::loader::{parse_forecast_csv, parse_merged_csv, parse_rental_csv};
use rental_core::record::{ForecastRecord, RentalRecord, WeatherMergedRecord};
use rental_data::aggregate::{monthly_counts, monthly_forecast, monthly_rental_weather};
use rental_data::chart::{ChartPayload, ChartSpec};
use rental_data::Selection;
use serde::Serialize;

/// Parsed records of one source, tagged by layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Records {
    Rental(Vec<RentalRecord>),
    Merged(Vec<WeatherMergedRecord>),
    Forecast(Vec<ForecastRecord>),
}

impl Records {
    /// Parse CSV text laid out as `kind`.
    pub fn parse(kind: Dataset, csv_data: &str) -> anyhow::Result<Self> {
        Ok(match kind {
            Dataset::Rental => Records::Rental(parse_rental_csv(csv_data)?),
            Dataset::Merged => Records::Merged(parse_merged_csv(csv_data)?),
            Dataset::Forecast => Records::Forecast(parse_forecast_csv(csv_data)?),
        })
    }

    /// Read and parse `source`.
    pub async fn load(kind: Dataset, source: &str) -> anyhow::Result<Self> {
        let body = read_source(source).await?;
        Records::parse(kind, &body).with_context(|| format!("failed to parse {}", source))
    }

    pub fn len(&self) -> usize {
        match self {
            Records::Rental(r) => r.len(),
            Records::Merged(r) => r.len(),
            Records::Forecast(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn machines(&self) -> Vec<String> {
        match self {
            Records::Rental(r) => distinct_machines(r),
            Records::Merged(r) => distinct_machines(r),
            Records::Forecast(r) => distinct_machines(r),
        }
    }

    pub fn years(&self) -> Vec<i32> {
        match self {
            Records::Rental(r) => distinct_years(r),
            Records::Merged(r) => distinct_years(r),
            Records::Forecast(r) => distinct_years(r),
        }
    }

    /// The 12-month series for `selection` as JSON, optionally wrapped with
    /// the chart specification the dashboard uses for this layout.
    pub fn monthly_json(&self, selection: &Selection, chart: bool, pretty: bool) -> anyhow::Result<String> {
        match self {
            Records::Rental(r) => render(
                &ChartSpec::rental_counts(),
                &monthly_counts(r, selection),
                chart,
                pretty,
            ),
            Records::Merged(r) => render(
                &ChartSpec::merged_rental_weather(),
                &monthly_rental_weather(r, selection),
                chart,
                pretty,
            ),
            Records::Forecast(r) => render(
                &ChartSpec::forecast_weather(),
                &monthly_forecast(r, selection),
                chart,
                pretty,
            ),
        }
    }
}

fn render<T: Serialize>(spec: &ChartSpec, data: &[T], chart: bool, pretty: bool) -> anyhow::Result<String> {
    let payload = ChartPayload::new(spec, data);
    match (chart, pretty) {
        (true, true) => payload.to_json_pretty(),
        (true, false) => payload.to_json(),
        (false, true) => Ok(serde_json::to_string_pretty(data)?),
        (false, false) => payload.data_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MERGED_CSV: &str = "\
machine,rental_date,count,rainfall
이앙기,2023-03-15,5,2.0
이앙기,2023-03-20,3,4.0
트랙터,2022-07-01,1,10.0
";

    const FORECAST_CSV: &str = "\
year_month,machine,predicted_count,rainfall,temperature
2024-07,트랙터,12.5,30.2,26.1
";

    #[test]
    fn rental_series_as_json() {
        let records = Records::parse(Dataset::Rental, MERGED_CSV).unwrap();
        let json: serde_json::Value = serde_json::from_str(
            &records
                .monthly_json(&Selection::new(2023, "이앙기"), false, false)
                .unwrap(),
        )
        .unwrap();
        let points = json.as_array().unwrap();
        assert_eq!(points.len(), 12);
        assert_eq!(points[2]["count"], 8);
        assert!(points[2].get("avgRain").is_none(), "Rental layout has no rainfall");
    }

    #[test]
    fn merged_series_with_chart_spec() {
        let records = Records::parse(Dataset::Merged, MERGED_CSV).unwrap();
        let json: serde_json::Value = serde_json::from_str(
            &records
                .monthly_json(&Selection::new(2023, "이앙기"), true, true)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(json["spec"]["bar"]["key"], "count");
        assert_eq!(json["data"][2]["avgRain"], 3.0);
        assert_eq!(json["data"][2]["count"], 8);
    }

    #[test]
    fn forecast_series_as_json() {
        let records = Records::parse(Dataset::Forecast, FORECAST_CSV).unwrap();
        let json: serde_json::Value = serde_json::from_str(
            &records
                .monthly_json(&Selection::new(2024, "트랙터"), false, true)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(json[6]["forecastCount"], 12.5);
        assert_eq!(json[6]["temperature"], 26.1);
        assert_eq!(json[0]["forecastCount"], 0.0);
    }

    #[test]
    fn selector_lists() {
        let records = Records::parse(Dataset::Merged, MERGED_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records.machines(), vec!["이앙기", "트랙터"]);
        assert_eq!(records.years(), vec![2022, 2023]);

        let forecasts = Records::parse(Dataset::Forecast, FORECAST_CSV).unwrap();
        assert_eq!(forecasts.years(), vec![2024]);
    }

    #[test]
    fn wrong_layout_is_an_error() {
        assert!(Records::parse(Dataset::Forecast, MERGED_CSV).is_err());
    }
}
