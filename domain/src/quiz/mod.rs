//! Quiz domain
//!
//! The category ledger and the rules that drive one quiz turn:
//!
//! - [`entities`]: `Category`, `QuizState`, `Verdict`, `TurnOutcome`
//! - [`value_objects`]: `ConfidenceThreshold`
//! - [`ledger`]: applying updates, finding a winner
//! - [`interpreter`]: parsing model replies
//! - [`phase`]: turn state machine

pub mod entities;
pub mod interpreter;
pub mod ledger;
pub mod phase;
pub mod value_objects;
