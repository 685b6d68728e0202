//! Turns free-form model output into a `(title, content)` pair.
//!
//! The first non-blank line becomes the title, everything after it becomes
//! the body. Markdown heading and emphasis markers are stripped from every
//! line, and the title is capped at [`MAX_TITLE_CHARS`] characters.

use crate::domain::article::value_objects::{MAX_TITLE_CHARS, truncate_chars};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LEADING_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[*_#]+\s*").expect("leading marker pattern is valid"));
static INLINE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_]{1,2}").expect("emphasis pattern is valid"));

const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generated text contains no usable lines")]
pub struct EmptyGeneration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub title: String,
    pub content: String,
}

/// Parse raw provider output. `fallback_title` is used when the first line
/// is nothing but markup. `content` may come back empty when the output is a
/// single line; callers decide whether that is acceptable.
pub fn parse_generated_text(
    raw: &str,
    fallback_title: &str,
) -> Result<GeneratedText, EmptyGeneration> {
    let mut lines = raw
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(clean_line);

    let first = lines.next().ok_or(EmptyGeneration)?;
    let title = match first.trim() {
        "" => fallback_title.to_string(),
        trimmed => trimmed.to_string(),
    };

    let content = lines
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
        .trim()
        .to_string();

    Ok(GeneratedText {
        title: truncate_chars(title, MAX_TITLE_CHARS),
        content,
    })
}

fn clean_line(line: &str) -> String {
    let without_prefix = LEADING_MARKERS.replace(line, "");
    INLINE_EMPHASIS.replace_all(&without_prefix, "").into_owned()
}
