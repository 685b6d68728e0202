use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a new row; the store assigns `id` and `created_at`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles, newest first.
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// Current time as reported by the store; doubles as a liveness check.
    async fn database_time(&self) -> DomainResult<DateTime<Utc>>;
}
