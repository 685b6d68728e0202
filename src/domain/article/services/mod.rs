// src/domain/article/services/mod.rs
mod response_parser;
mod topics;

pub use response_parser::{EmptyGeneration, GeneratedText, parse_generated_text};
pub use topics::{DEFAULT_TOPICS, TopicSelector};
