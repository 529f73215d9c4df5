use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizScreen;
use crate::vm::{QuizIntent, QuizVm, present};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.question_loader();
    let resource = loader.source().display_name();
    let vm = use_signal(move || QuizVm::loading(resource));

    // The only suspension point: one read of the payload at startup.
    use_future(move || {
        let loader = Arc::clone(&loader);
        let mut vm = vm;
        async move {
            let result = loader.load().await;
            vm.write().finish_load(result);
        }
    });

    let on_intent = move |intent: QuizIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    };
    let screen = present(&vm.read());
    let title = ctx.window_title().to_owned();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        main { class: "app-root",
            QuizScreen { screen, on_intent }
        }
    }
}
