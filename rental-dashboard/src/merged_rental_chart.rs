//! Actual rentals overlaid with average rainfall.

use dioxus::prelude::*;
use rental_chart_ui::components::{ChartContainer, ChartHeader, MachineSelector, YearSelector};
use rental_chart_ui::fetch::{data_url, load_csv};
use rental_chart_ui::js_bridge;
use rental_chart_ui::state::SelectionState;
use rental_core::distinct::{distinct_machines, distinct_years};
use rental_core::loader::parse_merged_csv;
use rental_core::MERGED_RENTAL_WEATHER_CSV;
use rental_core::record::WeatherMergedRecord;
use rental_data::aggregate::monthly_rental_weather;
use rental_data::chart::ChartSpec;

const CHART_ID: &str = "merged-rental-chart";

/// Bar chart of monthly rentals with a rainfall line.
///
/// Loads the merged file once, publishes its distinct machines and years to
/// the shared selection and seeds any missing part of it.
#[component]
pub fn MergedRentalChart() -> Element {
    let mut selection = use_context::<SelectionState>();
    let mut records: Signal<Vec<WeatherMergedRecord>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let spec = use_hook(ChartSpec::merged_rental_weather);

    use_future(move || async move {
        let data = load_csv(&data_url(MERGED_RENTAL_WEATHER_CSV), parse_merged_csv).await;
        selection.publish_options(distinct_years(&data), distinct_machines(&data));
        records.set(data);
        loading.set(false);
    });

    let series =
        use_memo(move || monthly_rental_weather(records.read().as_slice(), &selection.current()));

    let chart_spec = spec.clone();
    use_effect(move || {
        if loading() {
            return;
        }
        log::debug!("Rendering merged rental chart for {:?}", selection.peek());
        js_bridge::render_series(CHART_ID, &series(), &chart_spec);
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    rsx! {
        div {
            style: "padding: 1rem; background: #fff; border-radius: 8px; margin-bottom: 1rem;",

            ChartHeader {
                title: spec.title.clone(),
                unit_description: "막대: 월별 임대 건수 합계 / 선: 월별 평균 강수량 (mm)".to_string(),
            }

            div {
                style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
                MachineSelector { placeholder: "기종 선택".to_string() }
                YearSelector {}
            }

            ChartContainer {
                id: CHART_ID.to_string(),
                loading: loading(),
                empty: records.read().is_empty(),
            }
        }
    }
}
