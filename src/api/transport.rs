//! Raw JSON-over-HTTP POST, kept behind a trait so the session can be driven
//! without a network.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://sq.shcvs.cn/962200/html5/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub trait Transport {
    /// POST `body` to `path` and return the decoded JSON response.
    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> AppResult<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> AppResult<Value> {
        (**self).post(path, token, body)
    }
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|_| AppError::Config(format!("invalid base url '{}'", base_url)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn post(&self, path: &str, token: Option<&str>, body: &Value) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending request");

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);
        if let Some(token) = token {
            request = request.header("token", token);
        }

        let response = request.send()?;
        let status = response.status();
        debug!(%url, %status, "received response");

        if !status.is_success() {
            return Err(AppError::Transport(status.to_string()));
        }
        Ok(response.json::<Value>()?)
    }
}
