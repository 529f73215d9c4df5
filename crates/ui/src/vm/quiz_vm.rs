use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::QuestionSet;
use services::{LoadValidationError, QuizSession};

/// Discrete user actions, one per control on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    ToggleTranslation,
    ToggleTip,
    Skip,
    Answer,
    Restart,
}

/// The four mutually exclusive screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizScreenKind {
    #[default]
    Start,
    Session,
    Summary,
    Error,
}

/// Why the question payload could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure {
    resource: String,
    detail: String,
}

impl LoadFailure {
    #[must_use]
    pub fn new(resource: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            detail: detail.into(),
        }
    }

    /// Build a failure from an error, appending every lower-level cause.
    #[must_use]
    pub fn from_error(resource: impl Into<String>, err: &(dyn StdError + 'static)) -> Self {
        let mut detail = err.to_string();
        let mut cause = err.source();
        while let Some(inner) = cause {
            if detail.ends_with('.') {
                detail.pop();
            }
            detail.push_str(": ");
            detail.push_str(&inner.to_string());
            cause = inner.source();
        }
        Self::new(resource, detail)
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Could not load {}. Place the file at that location using the documented schema.",
            self.resource
        )
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            f.write_str(&self.message())
        } else {
            write!(f, "{} ({})", self.message(), self.detail)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(Arc<QuestionSet>),
    Failed(LoadFailure),
}

/// Top-level controller: owns the loaded data, the active session and the
/// current screen. Every user action goes through [`QuizVm::dispatch`].
#[derive(Debug)]
pub struct QuizVm {
    resource: String,
    load: LoadState,
    screen: QuizScreenKind,
    session: Option<QuizSession>,
}

impl QuizVm {
    /// Controller waiting for the payload named `resource`.
    #[must_use]
    pub fn loading(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            load: LoadState::Loading,
            screen: QuizScreenKind::Start,
            session: None,
        }
    }

    /// Controller with an already validated set (tests, embedded payloads).
    #[must_use]
    pub fn ready(resource: impl Into<String>, questions: QuestionSet) -> Self {
        let mut vm = Self::loading(resource);
        vm.finish_load(Ok(questions));
        vm
    }

    /// Apply the outcome of the startup load.
    pub fn finish_load(&mut self, result: Result<QuestionSet, LoadValidationError>) {
        self.session = None;
        match result {
            Ok(questions) => {
                self.load = LoadState::Ready(Arc::new(questions));
                self.screen = QuizScreenKind::Start;
            }
            Err(err) => {
                tracing::error!(resource = %self.resource, error = ?err, "failed to load questions");
                self.load = LoadState::Failed(LoadFailure::from_error(&self.resource, &err));
                self.screen = QuizScreenKind::Error;
            }
        }
    }

    /// Route one user action to the session engine.
    ///
    /// Actions that do not belong to the current screen are ignored.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        match (self.screen, intent) {
            (QuizScreenKind::Start, QuizIntent::Start) => self.begin(),
            (QuizScreenKind::Session, QuizIntent::ToggleTranslation) => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle_translation();
                }
            }
            (QuizScreenKind::Session, QuizIntent::ToggleTip) => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle_tip();
                }
            }
            (QuizScreenKind::Session, QuizIntent::Skip) => {
                if let Some(session) = self.session.as_mut() {
                    session.skip();
                }
                self.sync_finished();
            }
            (QuizScreenKind::Session, QuizIntent::Answer) => {
                if let Some(session) = self.session.as_mut() {
                    session.answer();
                }
                self.sync_finished();
            }
            (QuizScreenKind::Summary, QuizIntent::Restart) => {
                self.session = None;
                self.screen = QuizScreenKind::Start;
            }
            _ => {}
        }
    }

    fn begin(&mut self) {
        let LoadState::Ready(questions) = &self.load else {
            return;
        };
        let mut session = QuizSession::new(Arc::clone(questions));
        session.begin();
        self.session = Some(session);
        self.screen = QuizScreenKind::Session;
        self.sync_finished();
    }

    fn sync_finished(&mut self) {
        if self.session.as_ref().is_some_and(QuizSession::is_finished) {
            self.screen = QuizScreenKind::Summary;
        }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenKind {
        self.screen
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    pub fn questions(&self) -> Option<&QuestionSet> {
        match &self.load {
            LoadState::Ready(questions) => Some(questions),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Start is only possible once a valid set has been loaded.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.screen == QuizScreenKind::Start && self.questions().is_some()
    }
}
