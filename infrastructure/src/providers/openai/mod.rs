//! OpenAI chat completions provider

mod gateway;
mod types;

pub use gateway::{OpenAiGateway, OpenAiSettings};
