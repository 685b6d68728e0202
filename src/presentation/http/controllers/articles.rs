// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, GenerateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, body::Bytes, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateArticleRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

impl GenerateArticleRequest {
    /// An empty body is the same as `{}`.
    fn from_body(body: &[u8]) -> HttpResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|err| HttpError::bad_request(format!("invalid request body: {err}")))
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles, newest first.", body = [ArticleDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/articles/generate",
    request_body(content = GenerateArticleRequest, description = "Optional topic; a random one is used when absent."),
    responses(
        (status = 201, description = "Article generated and stored.", body = ArticleDto),
        (status = 400, description = "Unreadable request body.", body = ErrorResponse),
        (status = 500, description = "Generation failed; `stage` names the failing step.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn generate_article(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let request = GenerateArticleRequest::from_body(&body)?;
    let command = GenerateArticleCommand {
        topic: request.topic.filter(|topic| !topic.is_empty()),
    };

    let article = state
        .services
        .article_commands
        .generate_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}
