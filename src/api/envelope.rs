//! The `{code, msg, data}` wrapper every endpoint answers with.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

static HTML_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p[^>]*>([^<]+)</p[^>]*>").unwrap());

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn from_value(v: Value) -> AppResult<Self> {
        serde_json::from_value(v)
            .map_err(|e| AppError::Format(format!("unexpected response envelope: {}", e)))
    }

    /// `Ok(data)` on `code == 0`, the de-tagged message otherwise.
    pub fn into_data(self) -> Result<Value, String> {
        if self.code == 0 {
            Ok(self.data)
        } else {
            Err(plain_message(self.msg.as_deref().unwrap_or_default()))
        }
    }
}

/// Decode the `data` payload of a successful envelope.
pub fn decode_data<T: DeserializeOwned>(data: Value) -> AppResult<T> {
    serde_json::from_value(data)
        .map_err(|e| AppError::Format(format!("unexpected response data: {}", e)))
}

/// Messages sometimes arrive as `<p>..</p>` paragraphs. Keep the text of each
/// paragraph, one per line; anything without paragraphs is returned as is.
pub fn plain_message(msg: &str) -> String {
    let paragraphs: Vec<&str> = HTML_PARAGRAPH
        .captures_iter(msg)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    if paragraphs.is_empty() {
        msg.to_string()
    } else {
        paragraphs.join("\n")
    }
}
