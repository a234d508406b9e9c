//! Quiz turn phases

use super::entities::QuizState;

/// Where a quiz stands within the turn cycle
///
/// ```text
/// AwaitingFirstQuestion ──▶ SelectingNextQuestion ──▶ Resolved
///                                 ▲      │
///                                 │      ▼
/// UpdatingProbabilities ◀── AwaitingAnswer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// No question has been asked yet
    AwaitingFirstQuestion,
    /// A question is out and the client owes an answer
    AwaitingAnswer,
    /// Folding the user's answer into the probabilities
    UpdatingProbabilities,
    /// Asking the model for the next question
    SelectingNextQuestion,
    /// A category reached the threshold
    Resolved,
}

impl QuizPhase {
    /// Resting phase of a client-held state
    pub fn of_state(state: &QuizState) -> Self {
        if state.current_question.is_none() {
            QuizPhase::AwaitingFirstQuestion
        } else {
            QuizPhase::AwaitingAnswer
        }
    }

    /// First working phase for an incoming request.
    ///
    /// Probabilities are only updated when the state names the category the
    /// last question targeted and the request carries a non-blank answer.
    pub fn entry(state: &QuizState, answer: Option<&str>) -> Self {
        let has_answer = answer.is_some_and(|a| !a.trim().is_empty());
        if state.current_category.is_some() && has_answer {
            QuizPhase::UpdatingProbabilities
        } else {
            QuizPhase::SelectingNextQuestion
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QuizPhase::AwaitingFirstQuestion => "awaiting_first_question",
            QuizPhase::AwaitingAnswer => "awaiting_answer",
            QuizPhase::UpdatingProbabilities => "updating_probabilities",
            QuizPhase::SelectingNextQuestion => "selecting_next_question",
            QuizPhase::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::Category;

    fn state() -> QuizState {
        QuizState::new(vec![Category::new("A", 0.5), Category::new("B", 0.5)])
    }

    #[test]
    fn test_of_state() {
        assert_eq!(QuizPhase::of_state(&state()), QuizPhase::AwaitingFirstQuestion);
        assert_eq!(
            QuizPhase::of_state(&state().with_current_question("Q?")),
            QuizPhase::AwaitingAnswer
        );
    }

    #[test]
    fn test_entry_updates_only_with_category_and_answer() {
        let targeted = state().with_current_category("A");
        assert_eq!(
            QuizPhase::entry(&targeted, Some("I like puzzles")),
            QuizPhase::UpdatingProbabilities
        );
        assert_eq!(
            QuizPhase::entry(&targeted, None),
            QuizPhase::SelectingNextQuestion
        );
        assert_eq!(
            QuizPhase::entry(&targeted, Some("   ")),
            QuizPhase::SelectingNextQuestion
        );
        assert_eq!(
            QuizPhase::entry(&state(), Some("I like puzzles")),
            QuizPhase::SelectingNextQuestion
        );
    }
}
