mod quiz_vm;
mod screen_vm;

pub use quiz_vm::{LoadFailure, LoadState, QuizIntent, QuizScreenKind, QuizVm};
pub use screen_vm::{
    ErrorVm, HintVm, ScreenVm, SessionScreenVm, StartVm, SummaryVm, present,
};
