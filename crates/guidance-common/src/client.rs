use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ClientError;
use crate::guidance::{
    CategoryFilter, GuidanceRequest, GuidanceResponse, HealthResponse,
};

pub const GUIDANCE_PATH: &str = "/api/v1/guidance";
pub const HEALTH_PATH: &str = "/api/v1/health";
pub const DAILY_QURAN_PATH: &str = "/api/v1/daily-quran";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_MAX_ERROR_BODY_BYTES: usize = 8 * 1024;

#[derive(Clone, Debug)]
pub struct GuidanceClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Reserved. No request path retries.
    pub retry_attempts: u32,
    pub max_error_body_bytes: usize,
}

impl Default for GuidanceClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            max_error_body_bytes: DEFAULT_MAX_ERROR_BODY_BYTES,
        }
    }
}

impl GuidanceClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Optional:
    /// - `GUIDANCE_API_URL` (default: "http://localhost:8000")
    /// - `GUIDANCE_API_TIMEOUT_MS` (default: 30000)
    /// - `GUIDANCE_API_RETRY_ATTEMPTS` (default: 3, reserved)
    /// - `GUIDANCE_API_MAX_ERROR_BODY_BYTES` (default: 8192)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GUIDANCE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("GUIDANCE_API_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(DEFAULT_TIMEOUT_MS));

        let retry_attempts = std::env::var("GUIDANCE_API_RETRY_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS);

        let max_error_body_bytes = std::env::var("GUIDANCE_API_MAX_ERROR_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_ERROR_BODY_BYTES);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            retry_attempts,
            max_error_body_bytes,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Thin wrapper over the guidance backend's REST API.
///
/// Every call is a single bounded-timeout request. Nothing is retried.
#[derive(Clone)]
pub struct GuidanceClient {
    config: GuidanceClientConfig,
    http: reqwest::Client,
}

impl GuidanceClient {
    pub fn new(config: GuidanceClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("guidance-common/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GuidanceClientConfig {
        &self.config
    }

    /// Posts the trimmed query and applies `filter` to the response.
    ///
    /// A blank query fails before any request is built.
    pub async fn fetch_guidance(
        &self,
        query: &str,
        filter: &CategoryFilter,
    ) -> Result<GuidanceResponse, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::validation("Query cannot be empty"));
        }

        let request = GuidanceRequest {
            emotion_query: query.to_string(),
        };
        let resp = self
            .http
            .post(self.config.url(GUIDANCE_PATH))
            .json(&request)
            .send()
            .await?;
        let response: GuidanceResponse =
            parse_json_response(resp, self.config.max_error_body_bytes).await?;

        let received = response.results.len();
        let response = filter.apply(response);
        info!(
            received,
            kept = response.total_results,
            excluded = ?filter.excluded(),
            "guidance received"
        );
        Ok(response)
    }

    pub async fn check_health(&self) -> Result<HealthResponse, ClientError> {
        let resp = self.http.get(self.config.url(HEALTH_PATH)).send().await?;
        parse_json_response(resp, self.config.max_error_body_bytes).await
    }

    /// The backend's daily verse endpoint. Its payload is not fixed, so the
    /// raw JSON is returned.
    pub async fn daily_quran(&self) -> Result<serde_json::Value, ClientError> {
        let resp = self
            .http
            .get(self.config.url(DAILY_QURAN_PATH))
            .send()
            .await?;
        parse_json_response(resp, self.config.max_error_body_bytes).await
    }
}

async fn parse_json_response<T: for<'de> Deserialize<'de>>(
    resp: reqwest::Response,
    max_error_body_bytes: usize,
) -> Result<T, ClientError> {
    if resp.status().is_success() {
        let bytes = resp.bytes().await?;
        return Ok(serde_json::from_slice(&bytes)?);
    }
    Err(to_server_error(resp, max_error_body_bytes).await)
}

async fn to_server_error(resp: reqwest::Response, max_error_body_bytes: usize) -> ClientError {
    let status = resp.status();
    let body = read_limited_text(resp, max_error_body_bytes).await;
    let detail = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|e| e.detail)
        .and_then(detail_message);
    warn!(status = status.as_u16(), detail = ?detail, "guidance backend returned error");
    ClientError::Server { status, detail }
}

/// FastAPI-style `detail` is either a string or a list of validation errors
/// carrying `msg` fields.
fn detail_message(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read error body");
            String::new()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let config = GuidanceClientConfig::new("http://api.local:9000/");
        assert_eq!(config.base_url, "http://api.local:9000");
        assert_eq!(config.url(GUIDANCE_PATH), "http://api.local:9000/api/v1/guidance");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
        assert_eq!(config.retry_attempts, 3);
    }

    #[test]
    fn detail_message_handles_validation_lists() {
        let detail = serde_json::json!([
            {"loc": ["body", "emotion_query"], "msg": "String should have at least 3 characters"}
        ]);
        assert_eq!(
            detail_message(detail).as_deref(),
            Some("String should have at least 3 characters")
        );
        assert_eq!(detail_message(serde_json::json!("boom")).as_deref(), Some("boom"));
        assert_eq!(detail_message(serde_json::Value::Null), None);
        assert_eq!(detail_message(serde_json::json!([])), None);
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_network() {
        // Nothing listens on port 9; reaching the network would surface a transport error.
        let client = GuidanceClient::new(GuidanceClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client
            .fetch_guidance(" \t\n ", &CategoryFilter::excluding_quran())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.user_message(), "Query cannot be empty");
    }
}
