// src/application/error.rs
use crate::application::ports::generation::ProviderError;
use crate::domain::{article::EmptyGeneration, errors::DomainError};
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    EmptyGeneration(#[from] EmptyGeneration),

    #[error("store error: {0}")]
    Store(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Step of a generation cycle, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Never produced while the candidate list is non-empty; kept so failure
    /// reports can name every step of the cycle.
    SelectingTopic,
    CallingProvider,
    Parsing,
    Persisting,
}

impl GenerationStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectingTopic => "selecting_topic",
            Self::CallingProvider => "calling_provider",
            Self::Parsing => "parsing",
            Self::Persisting => "persisting",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation cycle that stopped at `stage`. Nothing was persisted.
#[derive(Debug, Error)]
#[error("article generation failed while {stage} (topic {topic:?}): {cause}")]
pub struct GenerationFailure {
    pub stage: GenerationStage,
    pub topic: Option<String>,
    #[source]
    pub cause: ApplicationError,
}

impl GenerationFailure {
    pub fn new(stage: GenerationStage, topic: Option<String>, cause: ApplicationError) -> Self {
        Self {
            stage,
            topic,
            cause,
        }
    }
}
