//! Dropdown selector for choosing a year.

use crate::state::SelectionState;
use dioxus::prelude::*;
use rental_data::chart::year_label;

/// Year dropdown selector.
/// Reads the offered years from SelectionState and updates the selected year on change.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<SelectionState>();
    let years = state.years.read().clone();
    let selected = (state.year)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.year.set(year);
        }
    };

    rsx! {
        select {
            style: "min-width: 120px;",
            onchange: on_change,
            for year in years.iter() {
                option {
                    key: "{year}",
                    value: "{year}",
                    selected: *year == selected,
                    "{year_label(*year)}"
                }
            }
        }
    }
}
