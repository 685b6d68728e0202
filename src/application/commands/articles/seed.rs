// src/application/commands/articles/seed.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::SeedOutcome, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub const SEED_ARTICLES: &[(&str, &str)] = &[
    (
        "Welcome to the Auto Blog",
        "This is your first seeded article.",
    ),
    (
        "How It Works",
        "Posts are generated automatically each day.",
    ),
    (
        "Next Steps",
        "Hook up the AI service to add fresh content.",
    ),
];

impl ArticleCommandService {
    /// Insert the welcome articles into an empty store. Does nothing when any
    /// article already exists.
    pub async fn seed_articles(&self) -> ApplicationResult<SeedOutcome> {
        let existing = self.read_repo.count().await?;
        if existing > 0 {
            tracing::info!(existing, "seed skipped: articles already present");
            return Ok(SeedOutcome::Skipped { existing });
        }

        for (title, content) in SEED_ARTICLES {
            let article = NewArticle::new(ArticleTitle::new(*title)?, ArticleContent::new(*content)?);
            self.write_repo.insert(article).await?;
        }

        tracing::info!(inserted = SEED_ARTICLES.len(), "seed complete");
        Ok(SeedOutcome::Seeded {
            inserted: SEED_ARTICLES.len(),
        })
    }
}
