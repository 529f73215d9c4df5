use dioxus::prelude::*;

use crate::views::{ErrorView, SessionView, StartView, SummaryView};
use crate::vm::{QuizIntent, ScreenVm};

/// Renders exactly one of the four screens.
#[component]
pub fn QuizScreen(screen: ScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    match screen {
        ScreenVm::Start(vm) => rsx! {
            StartView { vm, on_intent }
        },
        ScreenVm::Session(vm) => rsx! {
            SessionView { vm, on_intent }
        },
        ScreenVm::Summary(vm) => rsx! {
            SummaryView { vm, on_intent }
        },
        ScreenVm::Error(vm) => rsx! {
            ErrorView { vm }
        },
    }
}
