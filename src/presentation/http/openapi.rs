// src/presentation/http/openapi.rs
use crate::application::dto::ArticleDto;
use crate::presentation::http::{controllers::articles::GenerateArticleRequest, error::ErrorResponse};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Clock reading taken from the database.
    pub db_time: DateTime<Utc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::generate_article,
        super::routes::health
    ),
    components(schemas(HealthResponse, ArticleDto, ErrorResponse, GenerateArticleRequest)),
    tags(
        (name = "Articles", description = "Generated blog articles"),
        (name = "System", description = "Service status")
    ),
    info(title = "autoblog", description = "Daily AI-generated blog articles")
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
