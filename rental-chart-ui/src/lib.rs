//! Shared Dioxus components and D3.js bridge for rental chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js combo chart via `js_sys::eval()`
//! - `fetch`: async CSV download through the browser `fetch` API
//! - `state`: reactive year/machine selection with Dioxus Signals
//! - `components`: reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
