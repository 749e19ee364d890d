//! Selection state managed via Dioxus context.
//!
//! `SelectionState` bundles the selected year/machine and the options the
//! selectors offer into one `Copy` struct of Signals. A chart either provides
//! it for itself (local selection) or reads one that a container provided
//! with `use_context_provider` (lifted selection shared by several charts).

use dioxus::prelude::*;
use rental_data::Selection;

/// Reactive year/machine selection shared with the selector components.
#[derive(Clone, Copy)]
pub struct SelectionState {
    /// Currently selected year
    pub year: Signal<i32>,
    /// Currently selected machine; empty means nothing selected
    pub machine: Signal<String>,
    /// Years offered by the year selector
    pub years: Signal<Vec<i32>>,
    /// Machines offered by the machine selector
    pub machines: Signal<Vec<String>>,
}

impl SelectionState {
    /// Create a new SelectionState starting at `initial`, with no options yet.
    pub fn new(initial: Selection) -> Self {
        Self {
            year: Signal::new(initial.year),
            machine: Signal::new(initial.machine),
            years: Signal::new(Vec::new()),
            machines: Signal::new(Vec::new()),
        }
    }

    /// Read the current selection, subscribing the caller to changes.
    pub fn current(&self) -> Selection {
        Selection::new((self.year)(), (self.machine)())
    }

    /// Read the current selection without subscribing.
    pub fn peek(&self) -> Selection {
        Selection::new(*self.year.peek(), self.machine.peek().clone())
    }

    /// Replace the selector options and reset any part of the selection
    /// that is no longer offered.
    pub fn publish_options(&mut self, years: Vec<i32>, machines: Vec<String>) {
        let reconciled = self.peek().reconcile(&years, &machines);
        self.years.set(years);
        self.machines.set(machines);
        self.apply(reconciled);
    }

    /// Write `selection`, touching only the signals whose value changes.
    pub fn apply(&mut self, selection: Selection) {
        if *self.year.peek() != selection.year {
            self.year.set(selection.year);
        }
        if *self.machine.peek() != selection.machine {
            self.machine.set(selection.machine);
        }
    }
}
