// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use autoblog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use autoblog::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering},
};

/// Article store backed by a vector. Ids count up from 1 and are never reused.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    last_id: AtomicI64,
    insert_calls: AtomicUsize,
    fail_inserts: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `insert` fails with a persistence error.
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.fail_inserts.store(true, Ordering::SeqCst);
        repo
    }

    /// Every read, including the health probe, fails as if the database were down.
    pub fn unavailable() -> Self {
        let repo = Self::default();
        repo.fail_reads.store(true, Ordering::SeqCst);
        repo
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("db down".into()));
        }
        Ok(())
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn articles(&self) -> Vec<Article> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }

        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            created_at: super::time::fixed_now() + chrono::TimeDelta::seconds(id),
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn count(&self) -> DomainResult<u64> {
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.check_reads()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.check_reads()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn database_time(&self) -> DomainResult<DateTime<Utc>> {
        self.check_reads()?;
        Ok(super::time::fixed_now())
    }
}
