mod progress;
mod queue;
mod service;

// Public API of the session subsystem.
pub use progress::{HintKind, HintState, HintVisibility, SessionPhase, SessionState};
pub use queue::PlayQueue;
pub use service::{QuizSession, points_for};
