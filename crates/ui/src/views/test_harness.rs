use dioxus::prelude::*;

use crate::views::QuizScreen;
use crate::vm::{QuizIntent, QuizVm, ScreenVm, present};

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: ScreenVm,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    rsx! {
        QuizScreen {
            screen: props.screen.clone(),
            on_intent: move |_: QuizIntent| {},
        }
    }
}

pub fn render_screen(screen: ScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_vm(vm: &QuizVm) -> String {
    render_screen(present(vm))
}
