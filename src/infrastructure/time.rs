use crate::application::ports::time::{Clock, Timer};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Sleeps on the tokio timer. The remaining wait is recomputed from the wall
/// clock, so a deadline already in the past returns immediately.
#[derive(Default, Clone)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep_until(&self, deadline: DateTime<Utc>) {
        let remaining = (deadline - Utc::now()).to_std().unwrap_or_default();
        tokio::time::sleep(remaining).await;
    }
}
