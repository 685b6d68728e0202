// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::generation::TextGenerator,
    domain::article::{ArticleReadRepository, ArticleWriteRepository, TopicSelector},
};

/// Write side of the article surface. Holds only shared handles, so one
/// instance can serve any number of concurrent generation cycles.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) topics: TopicSelector,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn TextGenerator>,
        topics: TopicSelector,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            generator,
            topics,
        }
    }
}
