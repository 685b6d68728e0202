use super::ArticleQueryService;
use crate::application::error::ApplicationResult;
use chrono::{DateTime, Utc};

impl ArticleQueryService {
    /// Round-trip to the article store. Fails when the store is unreachable.
    pub async fn database_time(&self) -> ApplicationResult<DateTime<Utc>> {
        Ok(self.read_repo.database_time().await?)
    }
}
