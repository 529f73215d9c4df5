use quiz_core::model::{Question, QuestionSet};
use services::LoadValidationError;

use super::test_harness::render_vm;
use crate::vm::{QuizIntent, QuizVm};

const SCREEN_IDS: [&str; 4] = ["start-view", "session-view", "summary-view", "error-view"];

fn ready_vm(count: usize) -> QuizVm {
    let questions = (0..count)
        .map(|i| {
            Question::new(
                format!("Question {i}"),
                format!("Translation {i}"),
                format!("Tip {i}"),
            )
            .unwrap()
        })
        .collect();
    QuizVm::ready(
        "questions.json",
        QuestionSet::new(Some("Travel"), questions).unwrap(),
    )
}

fn assert_only_screen(html: &str, expected: &str) {
    for id in SCREEN_IDS {
        let present = html.contains(&format!("id=\"{id}\""));
        assert_eq!(present, id == expected, "screen {id} in {html}");
    }
}

#[test]
fn start_view_smoke_renders_loading_state() {
    let html = render_vm(&QuizVm::loading("questions.json"));

    assert_only_screen(&html, "start-view");
    assert!(html.contains("Loading questions…"), "missing loading text in {html}");
    assert!(html.contains("start-button"), "missing start button in {html}");
}

#[test]
fn start_view_smoke_renders_topic_and_total() {
    let html = render_vm(&ready_vm(3));

    assert_only_screen(&html, "start-view");
    assert!(html.contains("Travel"), "missing topic in {html}");
    assert!(html.contains(">3<"), "missing total in {html}");
    assert!(!html.contains("Loading questions…"), "unexpected loading text in {html}");
}

#[test]
fn session_view_smoke_renders_question_and_controls() {
    let mut vm = ready_vm(2);
    vm.dispatch(QuizIntent::Start);
    vm.dispatch(QuizIntent::ToggleTip);

    let html = render_vm(&vm);

    assert_only_screen(&html, "session-view");
    assert!(html.contains("Question "), "missing question in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Remaining: 1"), "missing remaining in {html}");
    assert!(html.contains("Translate"), "missing translate toggle in {html}");
    assert!(html.contains("Hide tip"), "missing tip toggle in {html}");
    assert!(html.contains("aria-pressed=\"true\""), "missing pressed tip in {html}");
    assert!(html.contains("aria-pressed=\"false\""), "missing unpressed translation in {html}");
    assert!(html.contains("Answered"), "missing answered button in {html}");
    assert!(html.contains("Skip"), "missing skip button in {html}");
}

#[test]
fn summary_view_smoke_renders_counters() {
    let mut vm = ready_vm(1);
    vm.dispatch(QuizIntent::Start);
    vm.dispatch(QuizIntent::Answer);

    let html = render_vm(&vm);

    assert_only_screen(&html, "summary-view");
    assert!(html.contains("Session Summary"), "missing title in {html}");
    assert!(html.contains(">5<"), "missing score in {html}");
    assert!(html.contains("Restart"), "missing restart in {html}");
}

#[test]
fn error_view_smoke_renders_failure() {
    let mut vm = QuizVm::loading("questions.json");
    vm.finish_load(Err(LoadValidationError::HttpStatus {
        status: 404,
        resource: "questions.json".into(),
    }));

    let html = render_vm(&vm);

    assert_only_screen(&html, "error-view");
    assert!(html.contains("Something went wrong"), "missing title in {html}");
    assert!(
        html.contains("Request failed with status 404"),
        "missing detail in {html}"
    );
}
