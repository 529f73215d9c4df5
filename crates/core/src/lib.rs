#![forbid(unsafe_code)]

pub mod model;

pub use model::{Question, QuestionSet, QuestionSetError, SessionSummary};
