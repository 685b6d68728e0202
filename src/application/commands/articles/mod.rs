// src/application/commands/articles/mod.rs
mod delete;
mod generate;
mod seed;
mod service;

pub use delete::DeleteArticleCommand;
pub use generate::GenerateArticleCommand;
pub use seed::SEED_ARTICLES;
pub use service::ArticleCommandService;
