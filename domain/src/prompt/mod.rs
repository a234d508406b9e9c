//! Prompt domain
//!
//! Few-shot templates for the two model calls of a quiz turn.

mod template;

pub use template::QuizPromptTemplate;
