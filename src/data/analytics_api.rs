use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    std::{error::Error, fmt, time::Duration},
};

use crate::{
    config::ANALYTICS,
    models::{AnalysisMode, AnalyticsEnvelope},
};

/// Root cause of a failed analytics fetch. Carried inside `anyhow::Error`
/// so callers can surface the server's own wording when it sent one.
#[derive(Debug)]
pub enum FetchError {
    /// Non-2xx response; `detail` is the server's message when the body
    /// had one, else a generic status string.
    Api { status: u16, detail: String },
    /// Connection, timeout, or body-decoding failure.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Api { status, detail } => {
                write!(f, "analytics API error (HTTP {}): {}", status, detail)
            }
            FetchError::Transport(msg) => write!(f, "analytics request failed: {}", msg),
        }
    }
}

impl Error for FetchError {}

impl FetchError {
    /// The message shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api { detail, .. } => detail.clone(),
            FetchError::Transport(msg) => msg.clone(),
        }
    }
}

/// Abstract interface for fetching analytics records.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    async fn fetch_records(
        &self,
        mode: AnalysisMode,
        symbol: Option<&str>,
    ) -> Result<AnalyticsEnvelope>;
}

pub struct HttpAnalyticsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalyticsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(ANALYTICS.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl AnalyticsProvider for HttpAnalyticsClient {
    async fn fetch_records(
        &self,
        mode: AnalysisMode,
        symbol: Option<&str>,
    ) -> Result<AnalyticsEnvelope> {
        let url = request_url(&self.base_url, mode, symbol);
        log::info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
            .with_context(|| format!("request failed for {}", mode.endpoint()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(status.as_u16(), &body);
            log::warn!("{} returned HTTP {}: {}", mode.endpoint(), status, detail);
            return Err(anyhow::Error::new(FetchError::Api {
                status: status.as_u16(),
                detail,
            })
            .context(format!("request rejected for {}", mode.endpoint())));
        }

        let envelope = response
            .json::<AnalyticsEnvelope>()
            .await
            .map_err(|e| FetchError::Transport(format!("malformed response body: {}", e)))
            .with_context(|| format!("bad payload from {}", mode.endpoint()))?;

        log::info!(
            "{} delivered {} strikes ({})",
            mode.endpoint(),
            envelope.data.len(),
            envelope.message
        );
        Ok(envelope)
    }
}

/// Full request URL for a mode. The symbol query is attached only for modes
/// that take one; `TopVolatileAll` scans every instrument unparameterized.
pub fn request_url(base_url: &str, mode: AnalysisMode, symbol: Option<&str>) -> String {
    let mut url = format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        ANALYTICS.path_prefix,
        mode.endpoint()
    );
    if mode.requires_symbol() {
        if let Some(symbol) = symbol {
            url.push_str("?symbol=");
            url.push_str(&normalize_symbol(symbol));
        }
    }
    url
}

/// Tickers go over the wire trimmed and uppercased.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Extract the server's `detail` message from an error body, falling back
/// to a generic status string for non-JSON or detail-less bodies.
pub fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(str::to_owned)))
        .unwrap_or_else(|| format!("server returned HTTP {}", status))
}
