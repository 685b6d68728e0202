use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, content: ArticleContent) -> Self {
        Self { title, content }
    }
}
