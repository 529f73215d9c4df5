#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod sessions;

pub use error::{LoadValidationError, SourceError};
pub use loader::{QuestionLoader, QuestionSource};

pub use sessions::{HintKind, HintState, HintVisibility, PlayQueue, QuizSession, SessionPhase, SessionState};
