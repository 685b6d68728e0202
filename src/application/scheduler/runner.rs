use super::DailySchedule;
use crate::application::{
    commands::articles::{ArticleCommandService, GenerateArticleCommand},
    dto::ArticleDto,
    error::GenerationFailure,
    ports::time::{Clock, Timer},
};
use chrono::{DateTime, Utc};
use std::{future::Future, sync::Arc};
use tracing::{error, info};

/// Fires one generation cycle per day and re-arms itself after every fire,
/// whatever the outcome.
pub struct DailyScheduler {
    schedule: DailySchedule,
    commands: Arc<ArticleCommandService>,
    clock: Arc<dyn Clock>,
    timer: Arc<dyn Timer>,
}

impl DailyScheduler {
    pub fn new(
        schedule: DailySchedule,
        commands: Arc<ArticleCommandService>,
        clock: Arc<dyn Clock>,
        timer: Arc<dyn Timer>,
    ) -> Self {
        Self {
            schedule,
            commands,
            clock,
            timer,
        }
    }

    pub fn next_fire(&self) -> DateTime<Utc> {
        self.schedule.next_fire_after(self.clock.now())
    }

    /// Loop until `shutdown` resolves. A pending timer is dropped on shutdown;
    /// a cycle that already started runs to completion first.
    pub async fn run<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut next = self.next_fire();

        loop {
            info!(next_fire = %next, "daily article generation armed");
            tokio::select! {
                () = &mut shutdown => {
                    info!("article scheduler stopped");
                    return;
                }
                () = self.timer.sleep_until(next) => {}
            }

            // Outcome is already logged.
            let _ = self.fire().await;

            let fired_at = self.clock.now().max(next);
            next = self.schedule.next_fire_after(fired_at);
        }
    }

    pub async fn fire(&self) -> Result<ArticleDto, GenerationFailure> {
        info!("starting daily article generation");
        let outcome = self
            .commands
            .generate_article(GenerateArticleCommand::default())
            .await;

        match &outcome {
            Ok(article) => info!(
                article_id = article.id,
                title = %article.title,
                "daily article generated"
            ),
            Err(failure) => error!(
                stage = %failure.stage,
                topic = failure.topic.as_deref(),
                error = %failure,
                "daily article generation failed"
            ),
        }
        outcome
    }
}
