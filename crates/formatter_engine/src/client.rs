use std::time::Duration;

use formatter_logging::{formatter_debug, formatter_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    ExtractError, ExtractRequest, ExtractionResponse, FailureKind, HealthReport, ServiceConfig,
};

/// Transport settings. No local timeouts unless set; the service and the
/// transport decide how long an exchange may take.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

#[async_trait::async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Single attempt at `POST /extract`; never retried.
    async fn extract(&self, url: &str) -> Result<ExtractionResponse, ExtractError>;

    async fn health(&self) -> Result<HealthReport, ExtractError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExtractionClient {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl ReqwestExtractionClient {
    pub fn new(config: ServiceConfig, settings: ClientSettings) -> Result<Self, ExtractError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("job-formatter/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ExtractError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl ExtractionClient for ReqwestExtractionClient {
    async fn extract(&self, url: &str) -> Result<ExtractionResponse, ExtractError> {
        let body = serde_json::to_vec(&ExtractRequest { url })
            .map_err(|err| ExtractError::new(FailureKind::Decode, err.to_string()))?;

        let response = self
            .client
            .post(self.config.extract_url().clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is tolerated; the status line still describes it.
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        formatter_debug!("extract response status={} body_len={}", status, text.len());
        serde_json::from_str(&text)
            .map_err(|err| ExtractError::new(FailureKind::Decode, err.to_string()))
    }

    async fn health(&self) -> Result<HealthReport, ExtractError> {
        let response = self
            .client
            .get(self.config.health_url().clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(status_error(status, &text));
        }
        serde_json::from_str(&text)
            .map_err(|err| ExtractError::new(FailureKind::Decode, err.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Prefers the server's own `message`, else describes the status line.
fn status_error(status: StatusCode, body: &str) -> ExtractError {
    let server_message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty());

    let message = match server_message {
        Some(message) => message,
        None => {
            if !body.is_empty() {
                formatter_warn!("unparsable error body for status {}", status.as_u16());
            }
            let reason = status.canonical_reason().unwrap_or_default();
            format!("Server error: {} {}", status.as_u16(), reason)
                .trim_end()
                .to_string()
        }
    };
    ExtractError::new(FailureKind::HttpStatus(status.as_u16()), message)
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ExtractError::new(FailureKind::Decode, err.to_string());
    }
    ExtractError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_server_message() {
        let err = status_error(StatusCode::BAD_REQUEST, r#"{"message":"Invalid job link"}"#);
        assert_eq!(err.kind, FailureKind::HttpStatus(400));
        assert_eq!(err.message, "Invalid job link");
    }

    #[test]
    fn status_error_falls_back_to_status_line() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.message, "Server error: 500 Internal Server Error");

        let err = status_error(StatusCode::BAD_GATEWAY, r#"{"message":""}"#);
        assert_eq!(err.message, "Server error: 502 Bad Gateway");

        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.message, "Server error: 503 Service Unavailable");
    }

    #[test]
    fn status_error_without_reason_has_no_trailing_space() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = status_error(status, "");
        assert_eq!(err.message, "Server error: 599");
    }
}
