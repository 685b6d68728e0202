pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use services::{EmptyGeneration, GeneratedText, TopicSelector, parse_generated_text};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, MAX_TITLE_CHARS};
