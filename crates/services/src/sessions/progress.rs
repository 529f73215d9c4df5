/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// The two hints a question carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Translation,
    Tip,
}

/// Visibility of one hint for the current question.
///
/// `viewed` latches on the first reveal and only resets with the next question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintVisibility {
    pub visible: bool,
    pub viewed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintState {
    pub translation: HintVisibility,
    pub tip: HintVisibility,
}

impl HintState {
    #[must_use]
    pub fn get(&self, kind: HintKind) -> HintVisibility {
        match kind {
            HintKind::Translation => self.translation,
            HintKind::Tip => self.tip,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: HintKind) -> &mut HintVisibility {
        match kind {
            HintKind::Translation => &mut self.translation,
            HintKind::Tip => &mut self.tip,
        }
    }
}

/// Mutable counters of the running session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub score: u32,
    pub answered: u32,
    pub skipped: u32,
    pub tips_shown: u32,
    pub translations_shown: u32,
    /// Questions presented so far; doubles as the next queue position.
    pub total_asked: usize,
    pub current: Option<usize>,
    pub hints: HintState,
}
