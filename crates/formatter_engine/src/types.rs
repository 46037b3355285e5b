use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// Body of `POST /extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractRequest<'a> {
    pub url: &'a str,
}

/// `status` field of an extraction response.
///
/// The service is only guaranteed to send `"error"` for failures; any other
/// value (including its own success wording) maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    Success,
    Error,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub status: Option<ExtractionStatus>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl ExtractionResponse {
    pub fn is_error(&self) -> bool {
        self.status == Some(ExtractionStatus::Error)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ExtractionCompleted {
        request_id: RequestId,
        result: Result<ExtractionResponse, ExtractError>,
    },
    AckElapsed {
        generation: u64,
    },
    HealthChecked {
        result: Result<HealthReport, ExtractError>,
    },
}

/// A failed exchange with the extraction service.
///
/// `message` is the text shown to the user: the server's own `message` for
/// non-2xx responses when it sent one, otherwise a generated description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractError {
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
