//! Application layer for sorting-quiz
//!
//! This crate contains the turn use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, RetryPolicy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
};
pub use use_cases::run_quiz_turn::{QuizTurnError, QuizTurnInput, RunQuizTurnUseCase};
