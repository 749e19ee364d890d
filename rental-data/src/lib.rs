//! Monthly aggregation and chart payloads for machine rental data.
//!
//! This crate turns raw records into the fixed 12-month series the charts
//! draw. Aggregation is a pure function of (records, [`Selection`]); the UI
//! recomputes it from scratch whenever either changes.

pub mod aggregate;
pub mod chart;
pub mod selection;

pub use selection::Selection;

/// Number of points in every monthly series.
pub const MONTHS: usize = 12;
