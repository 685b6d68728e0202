// src/application/ports/generation.rs
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to the text-generation provider. None of these are
/// retried; messages never carry the credential.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credential is not configured")]
    MissingCredential,
    #[error("provider request timed out after {0:?}")]
    Timeout(Duration),
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Ask the provider for an article about `topic` and return its raw text.
    async fn generate(&self, topic: &str) -> Result<String, ProviderError>;
}
