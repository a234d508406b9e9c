//! Model provider adapters

pub mod openai;

pub use openai::{OpenAiGateway, OpenAiSettings};
