mod question;
mod session;

pub use question::{DEFAULT_TOPIC, Question, QuestionField, QuestionSet, QuestionSetError};
pub use session::SessionSummary;
