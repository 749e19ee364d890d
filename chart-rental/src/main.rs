//! Actual Rental Counts
//!
//! Bar chart of monthly rental counts for one machine type in one year,
//! with its own year and machine selectors.
//!
//! Data flow:
//! 1. On mount: fetch `/data/merged_rental_weather.csv` (served from
//!    `public/data/`) and parse the rental columns.
//! 2. The same load publishes the distinct years and machines to the
//!    selectors and resets the selection if it is not in the data.
//! 3. On selection change: recompute the 12-month series and re-render
//!    via D3.js. Selection changes never refetch.

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use rental_chart_ui::components::{ChartContainer, ChartHeader, MachineSelector, YearSelector};
use rental_chart_ui::fetch::{data_url, load_csv};
use rental_chart_ui::js_bridge;
use rental_chart_ui::state::SelectionState;
use rental_core::distinct::{distinct_machines, distinct_years};
use rental_core::loader::parse_rental_csv;
use rental_core::MERGED_RENTAL_WEATHER_CSV;
use rental_core::record::RentalRecord;
use rental_data::aggregate::monthly_counts;
use rental_data::chart::{ChartSize, ChartSpec};
use rental_data::Selection;

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "rental-chart";

/// Machine selected before the data arrives.
const DEFAULT_MACHINE: &str = "이앙기";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut selection = use_context_provider(|| {
        SelectionState::new(Selection::new(Local::now().year(), DEFAULT_MACHINE))
    });
    let mut records: Signal<Vec<RentalRecord>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let spec = use_hook(ChartSpec::rental_counts);

    use_hook(js_bridge::init_charts);

    // ─── Load once on mount ───
    use_future(move || async move {
        let data = load_csv(&data_url(MERGED_RENTAL_WEATHER_CSV), parse_rental_csv).await;
        selection.publish_options(distinct_years(&data), distinct_machines(&data));
        records.set(data);
        loading.set(false);
    });

    let series = use_memo(move || monthly_counts(records.read().as_slice(), &selection.current()));

    // ─── Re-render whenever the series changes ───
    let chart_spec = spec.clone();
    use_effect(move || {
        if loading() {
            return;
        }
        let series = series();
        log::debug!("Rendering rental chart for {:?}", selection.peek());
        js_bridge::render_series(CHART_ID, &series, &chart_spec);
    });

    let (width, height) = match spec.size {
        ChartSize::Fixed { width, height } => (width, height),
        ChartSize::Responsive { height } => (0, height),
    };

    rsx! {
        div {
            style: "padding: 20px; background: #fafafa; border-radius: 8px; margin: 0 auto; width: fit-content; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader { title: spec.title.clone() }

            div {
                style: "display: flex; gap: 8px; margin-bottom: 8px;",
                YearSelector {}
                MachineSelector {}
            }

            ChartContainer {
                id: CHART_ID.to_string(),
                loading: loading(),
                empty: records.read().is_empty(),
                min_height: height,
                width: width,
            }
        }
    }
}
