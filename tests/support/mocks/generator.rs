// tests/support/mocks/generator.rs
use async_trait::async_trait;
use autoblog::application::ports::generation::{ProviderError, TextGenerator};
use std::{collections::VecDeque, sync::Mutex, time::Duration};

/// Replays queued responses in order, then falls back to a well-formed
/// article about the requested topic.
#[derive(Default)]
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    topics: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn failing(err: ProviderError) -> Self {
        Self::with_responses(vec![Err(err)])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn topics(&self) -> Vec<String> {
        self.topics.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.topics.lock().unwrap().len()
    }
}

pub fn sample_article(topic: &str) -> String {
    format!("# {topic}\n\n**Intro** about {topic}.\n\nA _second_ paragraph.\n")
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, topic: &str) -> Result<String, ProviderError> {
        self.topics.lock().unwrap().push(topic.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(sample_article(topic)))
    }
}
