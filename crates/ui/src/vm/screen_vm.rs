use quiz_core::model::SessionSummary;
use services::{HintVisibility, QuizSession};

use super::quiz_vm::{LoadState, QuizScreenKind, QuizVm};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub topic: Option<String>,
    pub total: usize,
    pub start_enabled: bool,
    pub loading: bool,
}

impl StartVm {
    #[must_use]
    pub fn topic_label(&self) -> &str {
        self.topic.as_deref().unwrap_or("Loading questions…")
    }
}

/// A hint block and its toggle control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintVm {
    pub visible: bool,
    pub label: &'static str,
}

impl HintVm {
    fn new(hint: HintVisibility, shown_label: &'static str, hidden_label: &'static str) -> Self {
        Self {
            visible: hint.visible,
            label: if hint.visible { shown_label } else { hidden_label },
        }
    }

    #[must_use]
    pub fn aria_pressed(&self) -> &'static str {
        if self.visible { "true" } else { "false" }
    }

    #[must_use]
    pub fn block_class(&self) -> &'static str {
        if self.visible { "hint" } else { "hint hidden" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionScreenVm {
    pub question: String,
    pub translation: String,
    pub tip: String,
    pub translation_hint: HintVm,
    pub tip_hint: HintVm,
    pub score: u32,
    pub remaining: usize,
}

impl SessionScreenVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!("Remaining: {}", self.remaining)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score: u32,
    pub answered: u32,
    pub skipped: u32,
    pub tips_shown: u32,
    pub translations_shown: u32,
}

impl From<SessionSummary> for SummaryVm {
    fn from(summary: SessionSummary) -> Self {
        Self {
            score: summary.score(),
            answered: summary.answered(),
            skipped: summary.skipped(),
            tips_shown: summary.tips_shown(),
            translations_shown: summary.translations_shown(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorVm {
    pub message: String,
}

/// Exactly one screen, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start(StartVm),
    Session(SessionScreenVm),
    Summary(SummaryVm),
    Error(ErrorVm),
}

/// Project controller state onto a screen. Pure: reads, never mutates.
#[must_use]
pub fn present(vm: &QuizVm) -> ScreenVm {
    match vm.screen() {
        QuizScreenKind::Start => ScreenVm::Start(start_vm(vm)),
        QuizScreenKind::Session => vm
            .session()
            .and_then(session_vm)
            .map_or_else(|| ScreenVm::Start(start_vm(vm)), ScreenVm::Session),
        QuizScreenKind::Summary => vm
            .session()
            .and_then(QuizSession::summary)
            .map_or_else(|| ScreenVm::Start(start_vm(vm)), |summary| {
                ScreenVm::Summary(summary.into())
            }),
        QuizScreenKind::Error => ScreenVm::Error(error_vm(vm)),
    }
}

fn start_vm(vm: &QuizVm) -> StartVm {
    let questions = vm.questions();
    StartVm {
        topic: questions.map(|set| set.topic().to_owned()),
        total: questions.map_or(0, |set| set.len()),
        start_enabled: vm.can_start(),
        loading: matches!(vm.load_state(), LoadState::Loading),
    }
}

fn session_vm(session: &QuizSession) -> Option<SessionScreenVm> {
    let question = session.current_question()?;
    let hints = session.state().hints;
    Some(SessionScreenVm {
        question: question.text().to_owned(),
        translation: question.translation().to_owned(),
        tip: question.tip().to_owned(),
        translation_hint: HintVm::new(hints.translation, "Hide translation", "Translate"),
        tip_hint: HintVm::new(hints.tip, "Hide tip", "Tip"),
        score: session.state().score,
        remaining: session.remaining(),
    })
}

fn error_vm(vm: &QuizVm) -> ErrorVm {
    let message = match vm.load_state() {
        LoadState::Failed(failure) => failure.to_string(),
        LoadState::Loading | LoadState::Ready(_) => String::new(),
    };
    ErrorVm { message }
}
