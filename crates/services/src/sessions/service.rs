use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, QuestionSet, SessionSummary};
use rand::{Rng, rng};

use super::progress::{HintKind, HintState, SessionPhase, SessionState};
use super::queue::PlayQueue;

const BASE_POINTS: u32 = 2;
const NO_TIP_BONUS: u32 = 2;
const NO_TRANSLATION_BONUS: u32 = 1;

/// Points for answering a question given which hints were viewed.
///
/// Ranges from 2 (both hints viewed) to 5 (neither).
#[must_use]
pub fn points_for(hints: HintState) -> u32 {
    let tip_bonus = if hints.tip.viewed { 0 } else { NO_TIP_BONUS };
    let translation_bonus = if hints.translation.viewed {
        0
    } else {
        NO_TRANSLATION_BONUS
    };
    BASE_POINTS + tip_bonus + translation_bonus
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through over a loaded question set.
///
/// Steps through a freshly shuffled `PlayQueue`, presenting each question exactly
/// once. Operations that need a current question are silent no-ops without one.
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    queue: PlayQueue,
    phase: SessionPhase,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            queue: PlayQueue::default(),
            phase: SessionPhase::NotStarted,
            state: SessionState::default(),
        }
    }

    /// Start (or restart) the session with a fresh shuffle.
    pub fn begin(&mut self) {
        self.begin_with(&mut rng());
    }

    /// Start (or restart) the session, shuffling with `rng`.
    pub fn begin_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.questions.is_empty() {
            return;
        }
        self.state = SessionState::default();
        self.queue = PlayQueue::shuffled_with(self.questions.len(), rng);
        self.phase = SessionPhase::InProgress;
        tracing::debug!(questions = self.questions.len(), "quiz session started");
        self.next_question_index();
    }

    /// Present the next queued question, or finish the session.
    ///
    /// Returns the index of the newly current question, `None` once the queue is
    /// exhausted.
    pub fn next_question_index(&mut self) -> Option<usize> {
        if self.state.total_asked >= self.questions.len() {
            self.state.current = None;
            if self.phase == SessionPhase::InProgress {
                self.phase = SessionPhase::Finished;
                tracing::info!(
                    score = self.state.score,
                    answered = self.state.answered,
                    skipped = self.state.skipped,
                    "quiz session finished"
                );
            }
            return None;
        }

        let index = self.queue.get(self.state.total_asked)?;
        self.state.current = Some(index);
        self.state.total_asked += 1;
        self.state.hints = HintState::default();
        tracing::debug!(index, asked = self.state.total_asked, "question presented");
        Some(index)
    }

    /// Flip the translation hint; returns the new visibility.
    pub fn toggle_translation(&mut self) -> Option<bool> {
        self.toggle_hint(HintKind::Translation)
    }

    /// Flip the tip hint; returns the new visibility.
    pub fn toggle_tip(&mut self) -> Option<bool> {
        self.toggle_hint(HintKind::Tip)
    }

    /// Flip a hint for the current question.
    ///
    /// The first reveal per question bumps the matching lifetime counter; later
    /// reveals and hides never change it.
    pub fn toggle_hint(&mut self, kind: HintKind) -> Option<bool> {
        self.state.current?;

        let hint = self.state.hints.get_mut(kind);
        hint.visible = !hint.visible;
        let first_reveal = hint.visible && !hint.viewed;
        if first_reveal {
            hint.viewed = true;
        }
        let visible = hint.visible;

        if first_reveal {
            match kind {
                HintKind::Translation => self.state.translations_shown += 1,
                HintKind::Tip => self.state.tips_shown += 1,
            }
        }
        Some(visible)
    }

    /// Skip the current question without scoring it.
    pub fn skip(&mut self) {
        if self.state.current.is_none() {
            return;
        }
        self.state.skipped += 1;
        self.next_question_index();
    }

    /// Mark the current question answered; returns the points awarded.
    pub fn answer(&mut self) -> Option<u32> {
        self.state.current?;

        let points = points_for(self.state.hints);
        self.state.score += points;
        self.state.answered += 1;
        self.next_question_index();
        Some(points)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Questions not yet presented.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.state.total_asked)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.current.and_then(|index| self.questions.get(index))
    }

    /// Cumulative counters, available once the session has finished.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.is_finished() {
            return None;
        }
        Some(SessionSummary::new(
            self.state.score,
            self.state.answered,
            self.state.skipped,
            self.state.tips_shown,
            self.state.translations_shown,
        ))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("topic", &self.questions.topic())
            .field("questions_len", &self.questions.len())
            .field("phase", &self.phase)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
