use dioxus::prelude::*;

use crate::vm::ErrorVm;

#[component]
pub fn ErrorView(vm: ErrorVm) -> Element {
    rsx! {
        section { id: "error-view", class: "view", role: "alert",
            h2 { "Something went wrong" }
            p { id: "error-message", "{vm.message}" }
        }
    }
}
