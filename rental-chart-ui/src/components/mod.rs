//! Reusable Dioxus RSX components for rental chart apps.

mod chart_container;
mod chart_header;
mod machine_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use machine_selector::MachineSelector;
pub use year_selector::YearSelector;
