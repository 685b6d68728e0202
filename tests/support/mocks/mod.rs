// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod generator;
pub mod time;

pub use article_repos::InMemoryArticleRepo;
pub use generator::{ScriptedGenerator, sample_article};
pub use time::{FakeClock, FakeTimer, fixed_now};
