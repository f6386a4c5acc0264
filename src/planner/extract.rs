//! Pulls the JSON payload out of a model's free-text reply.
//!
//! Order: a ```` ```json ```` fenced block, else the widest bracket span of
//! the expected shape. The fallback runs from the first opening bracket to
//! the last closing one without counting nesting, so prose that itself
//! contains brackets around the payload widens the capture and usually
//! fails to parse. That behavior is kept as-is.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").expect("valid fenced regex"));
static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"));
static ARRAY_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("valid array regex"));

/// Top-level JSON shape a capability expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    fn span(self) -> &'static Regex {
        match self {
            Shape::Object => &OBJECT_SPAN,
            Shape::Array => &ARRAY_SPAN,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not parse JSON from the response")]
    NotFound,

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the text region that would be parsed, if any.
pub fn locate_json(text: &str, shape: Shape) -> Option<&str> {
    if let Some(fenced) = FENCED_JSON.captures(text).and_then(|c| c.get(1)) {
        return Some(fenced.as_str());
    }
    shape.span().find(text).map(|m| m.as_str())
}

/// Locates and parses the embedded JSON document.
pub fn extract_json(text: &str, shape: Shape) -> Result<Value, ExtractError> {
    let candidate = locate_json(text, shape).ok_or(ExtractError::NotFound)?;
    Ok(serde_json::from_str(candidate)?)
}
