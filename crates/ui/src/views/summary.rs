use dioxus::prelude::*;

use crate::vm::{QuizIntent, SummaryVm};

#[component]
pub fn SummaryView(vm: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { id: "summary-view", class: "view",
            h2 { "Session Summary" }

            dl { class: "summary",
                dt { "Score" }
                dd { id: "summary-score", "{vm.score}" }

                dt { "Answered" }
                dd { id: "summary-answered", "{vm.answered}" }

                dt { "Skipped" }
                dd { id: "summary-skipped", "{vm.skipped}" }

                dt { "Tips shown" }
                dd { id: "summary-tips", "{vm.tips_shown}" }

                dt { "Translations shown" }
                dd { id: "summary-translations", "{vm.translations_shown}" }
            }

            button {
                id: "restart-button",
                class: "primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart"
            }
        }
    }
}
