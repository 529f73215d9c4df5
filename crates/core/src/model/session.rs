/// Cumulative counters of a finished quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    score: u32,
    answered: u32,
    skipped: u32,
    tips_shown: u32,
    translations_shown: u32,
}

impl SessionSummary {
    #[must_use]
    pub const fn new(
        score: u32,
        answered: u32,
        skipped: u32,
        tips_shown: u32,
        translations_shown: u32,
    ) -> Self {
        Self {
            score,
            answered,
            skipped,
            tips_shown,
            translations_shown,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    #[must_use]
    pub fn tips_shown(&self) -> u32 {
        self.tips_shown
    }

    #[must_use]
    pub fn translations_shown(&self) -> u32 {
        self.translations_shown
    }

    /// Questions that were either answered or skipped.
    #[must_use]
    pub fn total_asked(&self) -> u32 {
        self.answered.saturating_add(self.skipped)
    }
}
