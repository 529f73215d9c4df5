mod error;
mod screen;
mod session;
mod start;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use error::ErrorView;
pub use screen::QuizScreen;
pub use session::SessionView;
pub use start::StartView;
pub use summary::SummaryView;
