//! Machine Rental Dashboard
//!
//! Two charts driven by one year/machine selection:
//!
//! - [`MergedRentalChart`]: actual monthly rentals with average rainfall.
//!   It owns the selectors and seeds the selection from its data.
//! - [`ForecastBoard`]: forecast monthly rentals with forecast rainfall and
//!   temperature for the same selection.
//!
//! The selection is lifted into this container and shared through context,
//! so changing it in the merged chart re-aggregates both charts.

mod forecast_board;
mod merged_rental_chart;

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use forecast_board::ForecastBoard;
use merged_rental_chart::MergedRentalChart;
use rental_chart_ui::js_bridge;
use rental_chart_ui::state::SelectionState;
use rental_data::Selection;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    // No machine until the merged data arrives and seeds one.
    use_context_provider(|| SelectionState::new(Selection::new(Local::now().year(), "")));
    use_hook(js_bridge::init_charts);

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            MergedRentalChart {}
            ForecastBoard {}
        }
    }
}
