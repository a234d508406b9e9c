//! Domain layer for sorting-quiz
//!
//! This crate contains the quiz entities and the pure decision logic of a
//! turn. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Category Ledger
//!
//! The running belief that the user belongs to each category. Updates come
//! from the model as a name → probability map and are applied atomically.
//!
//! ## Turn
//!
//! One request/response cycle: optionally fold the user's answer into the
//! ledger, ask for the next question, and resolve once a category reaches the
//! confidence threshold.

pub mod core;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use core::error::{ResponseError, StateError, ValidationError};
pub use prompt::QuizPromptTemplate;
pub use quiz::{
    entities::{Category, QuizState, TurnOutcome, Verdict},
    interpreter::{parse_probability_update, parse_question_text},
    ledger::{apply_update, find_winner, leading_category, renormalize},
    phase::QuizPhase,
    value_objects::ConfidenceThreshold,
};
