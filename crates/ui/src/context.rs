use std::sync::Arc;

use services::QuestionLoader;

pub trait UiApp: Send + Sync {
    fn window_title(&self) -> String;
    fn question_loader(&self) -> Arc<QuestionLoader>;
}

#[derive(Clone)]
pub struct AppContext {
    window_title: String,
    question_loader: Arc<QuestionLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            window_title: app.window_title(),
            question_loader: app.question_loader(),
        }
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn question_loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.question_loader)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
