use dioxus::prelude::*;

use crate::vm::{QuizIntent, StartVm};

#[component]
pub fn StartView(vm: StartVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { id: "start-view", class: "view",
            h1 { id: "start-topic", "{vm.topic_label()}" }
            p { class: "muted",
                "Questions: "
                span { id: "start-total", "{vm.total}" }
            }
            if vm.loading {
                p { class: "status", role: "status", "Loading questions…" }
            }
            button {
                id: "start-button",
                class: "primary",
                r#type: "button",
                disabled: !vm.start_enabled,
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start"
            }
        }
    }
}
