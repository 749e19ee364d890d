//! Dropdown selector for choosing a machine type.

use crate::state::SelectionState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MachineSelectorProps {
    /// Label of an extra empty option that clears the selection
    pub placeholder: Option<String>,
}

/// Machine dropdown selector.
/// Reads the offered machines from SelectionState and updates the selected machine on change.
#[component]
pub fn MachineSelector(props: MachineSelectorProps) -> Element {
    let mut state = use_context::<SelectionState>();
    let machines = state.machines.read().clone();
    let selected = (state.machine)();

    let on_change = move |evt: Event<FormData>| {
        state.machine.set(evt.value());
    };

    rsx! {
        select {
            style: "min-width: 150px;",
            onchange: on_change,
            if let Some(placeholder) = props.placeholder.as_ref() {
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{placeholder}"
                }
            }
            for machine in machines.iter() {
                option {
                    key: "{machine}",
                    value: "{machine}",
                    selected: *machine == selected,
                    "{machine}"
                }
            }
        }
    }
}
