//! The (year, machine) pair a chart is filtered by.

use serde::Serialize;

/// User-chosen year and machine type.
///
/// An empty `machine` is the "nothing selected" sentinel; it matches no
/// record, so it aggregates to an all-zero series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub year: i32,
    pub machine: String,
}

impl Selection {
    pub fn new(year: i32, machine: impl Into<String>) -> Self {
        Self {
            year,
            machine: machine.into(),
        }
    }

    /// Whether a record with this machine label and year is included.
    ///
    /// Machine labels are compared exactly, without trimming or case folding.
    pub fn matches(&self, machine: &str, year: i32) -> bool {
        self.year == year && self.machine == machine
    }

    /// Fall back to the first available value for any part of the selection
    /// that is absent from the data.
    ///
    /// An empty list leaves the corresponding part untouched.
    pub fn reconcile(&self, years: &[i32], machines: &[String]) -> Selection {
        let year = match years.first() {
            Some(&first) if !years.contains(&self.year) => first,
            _ => self.year,
        };
        let machine = match machines.first() {
            Some(first) if !machines.contains(&self.machine) => first.clone(),
            _ => self.machine.clone(),
        };
        Selection { year, machine }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machines(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_selection_is_kept() {
        let sel = Selection::new(2023, "이앙기");
        let reconciled = sel.reconcile(&[2022, 2023], &machines(&["이앙기", "트랙터"]));
        assert_eq!(reconciled, sel);
    }

    #[test]
    fn absent_values_fall_back_to_first() {
        let sel = Selection::new(2030, "굴삭기");
        let reconciled = sel.reconcile(&[2021, 2022], &machines(&["이앙기", "트랙터"]));
        assert_eq!(reconciled, Selection::new(2021, "이앙기"));
    }

    #[test]
    fn empty_machine_is_seeded() {
        let sel = Selection::new(2022, "");
        let reconciled = sel.reconcile(&[2022], &machines(&["콤바인"]));
        assert_eq!(reconciled, Selection::new(2022, "콤바인"));
    }

    #[test]
    fn empty_data_leaves_selection_unchanged() {
        let sel = Selection::new(2025, "");
        assert_eq!(sel.reconcile(&[], &[]), sel);
    }

    #[test]
    fn matches_is_exact() {
        let sel = Selection::new(2023, "트랙터");
        assert!(sel.matches("트랙터", 2023));
        assert!(!sel.matches("트랙터 ", 2023));
        assert!(!sel.matches("트랙터", 2022));
    }
}
