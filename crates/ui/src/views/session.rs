use dioxus::prelude::*;

use crate::vm::{QuizIntent, SessionScreenVm};

#[component]
pub fn SessionView(vm: SessionScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let translation_hint = vm.translation_hint.clone();
    let tip_hint = vm.tip_hint.clone();
    let translation_hidden = if translation_hint.visible { "false" } else { "true" };
    let tip_hidden = if tip_hint.visible { "false" } else { "true" };

    rsx! {
        section { id: "session-view", class: "view",
            div { class: "status-bar",
                span { id: "status-score", "{vm.score_label()}" }
                span { id: "status-remaining", "{vm.remaining_label()}" }
            }

            p { id: "question-text", class: "question", "{vm.question}" }

            div {
                id: "translation-block",
                class: translation_hint.block_class(),
                "aria-hidden": translation_hidden,
                p { id: "translation-text", "{vm.translation}" }
            }
            div {
                id: "tip-block",
                class: tip_hint.block_class(),
                "aria-hidden": tip_hidden,
                p { id: "tip-text", "{vm.tip}" }
            }

            div { class: "controls",
                button {
                    id: "translate-button",
                    r#type: "button",
                    "aria-pressed": translation_hint.aria_pressed(),
                    onclick: move |_| on_intent.call(QuizIntent::ToggleTranslation),
                    "{translation_hint.label}"
                }
                button {
                    id: "tip-button",
                    r#type: "button",
                    "aria-pressed": tip_hint.aria_pressed(),
                    onclick: move |_| on_intent.call(QuizIntent::ToggleTip),
                    "{tip_hint.label}"
                }
                button {
                    id: "skip-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Skip),
                    "Skip"
                }
                button {
                    id: "answered-button",
                    class: "primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Answer),
                    "Answered"
                }
            }
        }
    }
}
