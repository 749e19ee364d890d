//! Forecast rentals with forecast weather.

use dioxus::prelude::*;
use rental_chart_ui::components::{ChartContainer, ChartHeader};
use rental_chart_ui::fetch::{data_url, load_csv};
use rental_chart_ui::js_bridge;
use rental_chart_ui::state::SelectionState;
use rental_core::loader::parse_forecast_csv;
use rental_core::MACHINE_MONTHLY_PREDICTIONS_CSV;
use rental_core::record::ForecastRecord;
use rental_data::aggregate::monthly_forecast;
use rental_data::chart::ChartSpec;

const CHART_ID: &str = "forecast-chart";

/// Forecast counts as bars with rainfall and temperature lines.
///
/// Follows the shared selection without changing it.
#[component]
pub fn ForecastBoard() -> Element {
    let selection = use_context::<SelectionState>();
    let mut predictions: Signal<Vec<ForecastRecord>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let spec = use_hook(ChartSpec::forecast_weather);

    use_future(move || async move {
        predictions.set(load_csv(&data_url(MACHINE_MONTHLY_PREDICTIONS_CSV), parse_forecast_csv).await);
        loading.set(false);
    });

    let series = use_memo(move || monthly_forecast(predictions.read().as_slice(), &selection.current()));

    let chart_spec = spec.clone();
    use_effect(move || {
        if loading() {
            return;
        }
        log::debug!("Rendering forecast chart for {:?}", selection.peek());
        js_bridge::render_series(CHART_ID, &series(), &chart_spec);
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    rsx! {
        div {
            style: "padding: 1rem; background: #fafafa; border-radius: 8px; margin-top: 2rem;",

            ChartHeader { title: spec.title.clone() }

            ChartContainer {
                id: CHART_ID.to_string(),
                loading: loading(),
                empty: predictions.read().is_empty(),
            }
        }
    }
}
