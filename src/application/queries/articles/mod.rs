mod get_by_id;
mod health;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
