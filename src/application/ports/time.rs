// src/application/ports/time.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Suspends the caller until a wall-clock instant.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep_until(&self, deadline: DateTime<Utc>);
}
