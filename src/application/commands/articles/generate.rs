// src/application/commands/articles/generate.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, GenerationFailure, GenerationStage},
    },
    domain::article::{
        ArticleContent, ArticleTitle, EmptyGeneration, NewArticle, parse_generated_text,
        value_objects::truncate_chars,
    },
};
use tracing::{debug, info, instrument, warn};

const LOGGED_CAUSE_CHARS: usize = 300;

#[derive(Debug, Clone, Default)]
pub struct GenerateArticleCommand {
    pub topic: Option<String>,
}

impl GenerateArticleCommand {
    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
        }
    }
}

impl ArticleCommandService {
    /// Run one generation cycle: pick a topic, call the provider, parse the
    /// output and store it. The first failing step ends the cycle and nothing
    /// is written.
    #[instrument(skip_all, fields(requested_topic = command.topic.as_deref()))]
    pub async fn generate_article(
        &self,
        command: GenerateArticleCommand,
    ) -> Result<ArticleDto, GenerationFailure> {
        let topic = self.topics.select(command.topic.as_deref());
        debug!(%topic, "topic selected");

        let raw = self
            .generator
            .generate(&topic)
            .await
            .map_err(|err| failure(GenerationStage::CallingProvider, &topic, err.into()))?;

        let parsed = parse_generated_text(&raw, &topic)
            .map_err(|err| failure(GenerationStage::Parsing, &topic, err.into()))?;
        let title = ArticleTitle::truncated(parsed.title)
            .map_err(|err| failure(GenerationStage::Parsing, &topic, err.into()))?;
        let content = ArticleContent::new(parsed.content).map_err(|_| {
            failure(GenerationStage::Parsing, &topic, EmptyGeneration.into())
        })?;

        let article = self
            .write_repo
            .insert(NewArticle::new(title, content))
            .await
            .map_err(|err| {
                failure(
                    GenerationStage::Persisting,
                    &topic,
                    ApplicationError::store(err.to_string()),
                )
            })?;

        info!(article_id = %article.id, title = %article.title, %topic, "article generated");
        Ok(article.into())
    }
}

fn failure(stage: GenerationStage, topic: &str, cause: ApplicationError) -> GenerationFailure {
    warn!(
        %stage,
        topic,
        cause = %truncate_chars(cause.to_string(), LOGGED_CAUSE_CHARS),
        "article generation failed"
    );
    GenerationFailure::new(stage, Some(topic.to_string()), cause)
}
