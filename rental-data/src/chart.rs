//! Declarative chart specifications passed to the D3.js combo chart.
//!
//! A [`ChartSpec`] describes one primary bar series on the left axis and
//! optional line series on an independent right axis, with Korean labels.
//! It holds no data; [`ChartPayload`] pairs it with a monthly series for
//! JSON export.

use serde::Serialize;

/// Suffix appended to month ticks ("3월").
pub const MONTH_SUFFIX: &str = "월";

/// Suffix appended to year options ("2023년").
pub const YEAR_SUFFIX: &str = "년";

/// Selector label for a year.
pub fn year_label(year: i32) -> String {
    format!("{}{}", year, YEAR_SUFFIX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    /// Field of each data point drawn as bars.
    pub key: String,
    /// Legend and tooltip label.
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Linear,
    Monotone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub key: String,
    pub name: String,
    pub color: String,
    pub stroke_width: f64,
    /// Radius of point markers; `None` draws no markers.
    pub dot_radius: Option<f64>,
    pub curve: Curve,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartSize {
    /// Fixed pixel board.
    Fixed { width: u32, height: u32 },
    /// Fills the container width.
    Responsive { height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_key: String,
    pub x_tick_suffix: String,
    pub left_axis_label: Option<String>,
    pub right_axis_label: Option<String>,
    /// Whether the left axis may show fractional ticks.
    pub allow_decimals: bool,
    pub bar: BarSeries,
    pub lines: Vec<LineSeries>,
    pub legend: Option<LegendPosition>,
    pub tooltip: bool,
    pub size: ChartSize,
    pub margin: Margin,
}

impl ChartSpec {
    fn monthly(title: &str, bar: BarSeries, size: ChartSize, margin: Margin) -> Self {
        Self {
            title: title.to_string(),
            x_key: "month".to_string(),
            x_tick_suffix: MONTH_SUFFIX.to_string(),
            left_axis_label: None,
            right_axis_label: None,
            allow_decimals: true,
            bar,
            lines: Vec::new(),
            legend: None,
            tooltip: true,
            size,
            margin,
        }
    }

    /// Actual rental counts: bars only, integer axis, fixed 1600×700 board.
    pub fn rental_counts() -> Self {
        Self {
            allow_decimals: false,
            ..Self::monthly(
                "기종별 실제 임대 건수",
                BarSeries {
                    key: "count".to_string(),
                    name: "실제 임대 건수".to_string(),
                    color: "#8884d8".to_string(),
                },
                ChartSize::Fixed {
                    width: 1600,
                    height: 700,
                },
                Margin {
                    top: 20,
                    right: 40,
                    bottom: 20,
                    left: 20,
                },
            )
        }
    }

    /// Actual rental counts with average rainfall on the right axis.
    pub fn merged_rental_weather() -> Self {
        Self {
            left_axis_label: Some("임대 건수".to_string()),
            right_axis_label: Some("평균 강수량 (mm)".to_string()),
            lines: vec![LineSeries {
                key: "avgRain".to_string(),
                name: "평균 강수량".to_string(),
                color: "#e15759".to_string(),
                stroke_width: 1.5,
                dot_radius: None,
                curve: Curve::Linear,
            }],
            legend: Some(LegendPosition::Top),
            ..Self::monthly(
                "🚜 기종별 실제 임대 & 평균 강수량",
                BarSeries {
                    key: "count".to_string(),
                    name: "임대 건수".to_string(),
                    color: "#4e79a7".to_string(),
                },
                ChartSize::Responsive { height: 300 },
                Margin {
                    top: 30,
                    right: 40,
                    bottom: 20,
                    left: 40,
                },
            )
        }
    }

    /// Forecast rental counts with forecast rainfall and temperature lines.
    pub fn forecast_weather() -> Self {
        Self {
            left_axis_label: Some("예측 건수".to_string()),
            right_axis_label: Some("강수량(mm)/기온(°C)".to_string()),
            lines: vec![
                LineSeries {
                    key: "rainfall".to_string(),
                    name: "예측 강수량(mm)".to_string(),
                    color: "#4e79a7".to_string(),
                    stroke_width: 2.0,
                    dot_radius: Some(3.0),
                    curve: Curve::Monotone,
                },
                LineSeries {
                    key: "temperature".to_string(),
                    name: "예측 기온(°C)".to_string(),
                    color: "#e15759".to_string(),
                    stroke_width: 2.0,
                    dot_radius: Some(3.0),
                    curve: Curve::Monotone,
                },
            ],
            legend: Some(LegendPosition::Top),
            ..Self::monthly(
                "🔮 기종별 예측 임대 건수 및 날씨 정보",
                BarSeries {
                    key: "forecastCount".to_string(),
                    name: "예측 임대 건수".to_string(),
                    color: "#f28e2c".to_string(),
                },
                ChartSize::Responsive { height: 300 },
                Margin {
                    top: 20,
                    right: 40,
                    bottom: 20,
                    left: 20,
                },
            )
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A chart specification together with the series it draws.
#[derive(Debug, Serialize)]
pub struct ChartPayload<'a, T: Serialize> {
    pub spec: &'a ChartSpec,
    pub data: &'a [T],
}

impl<'a, T: Serialize> ChartPayload<'a, T> {
    pub fn new(spec: &'a ChartSpec, data: &'a [T]) -> Self {
        Self { spec, data }
    }

    pub fn data_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self.data)?)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{monthly_counts, MonthlyForecast};
    use crate::Selection;
    use rental_core::record::RentalRecord;

    #[test]
    fn year_label_carries_korean_suffix() {
        assert_eq!(year_label(2023), "2023년");
    }

    #[test]
    fn bar_keys_match_series_fields() {
        let series = monthly_counts::<RentalRecord>(&[], &Selection::new(2023, "이앙기"));
        let point = serde_json::to_value(series[0]).unwrap();
        assert!(point.get(&ChartSpec::rental_counts().bar.key).is_some());
        assert!(point.get(&ChartSpec::merged_rental_weather().bar.key).is_some());

        let forecast = serde_json::to_value(MonthlyForecast {
            month: 1,
            forecast_count: 0.0,
            rainfall: 0.0,
            temperature: 0.0,
        })
        .unwrap();
        let spec = ChartSpec::forecast_weather();
        assert!(forecast.get(&spec.bar.key).is_some());
        for line in &spec.lines {
            assert!(forecast.get(&line.key).is_some(), "Missing field {}", line.key);
        }
    }

    #[test]
    fn rental_chart_is_integer_bars_only() {
        let spec = ChartSpec::rental_counts();
        assert!(!spec.allow_decimals);
        assert!(spec.lines.is_empty());
        assert_eq!(spec.right_axis_label, None);
        assert_eq!(
            spec.size,
            ChartSize::Fixed {
                width: 1600,
                height: 700
            }
        );
    }

    #[test]
    fn spec_serializes_for_d3() {
        let json: serde_json::Value =
            serde_json::from_str(&ChartSpec::forecast_weather().to_json().unwrap()).unwrap();
        assert_eq!(json["xKey"], "month");
        assert_eq!(json["xTickSuffix"], "월");
        assert_eq!(json["legend"], "top");
        assert_eq!(json["size"]["kind"], "responsive");
        assert_eq!(json["size"]["height"], 300);
        assert_eq!(json["lines"][0]["curve"], "monotone");
        assert_eq!(json["lines"][1]["dotRadius"], 3.0);
    }

    #[test]
    fn payload_bundles_spec_and_data() {
        let spec = ChartSpec::merged_rental_weather();
        let data = [1, 2, 3];
        let payload = ChartPayload::new(&spec, &data);
        assert_eq!(payload.data_json().unwrap(), "[1,2,3]");
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["spec"]["bar"]["key"], "count");
        assert_eq!(json["data"].as_array().map(Vec::len), Some(3));
    }
}
