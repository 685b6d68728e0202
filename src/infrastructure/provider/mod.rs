mod chat_completions;

pub use chat_completions::{ChatCompletionsClient, ProviderSettings, build_prompt};
