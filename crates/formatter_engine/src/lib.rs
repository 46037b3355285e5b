//! Job formatter engine: extraction service client, clipboard and timers.
mod client;
mod clipboard;
mod config;
mod engine;
mod timer;
mod types;

pub use client::{ClientSettings, ExtractionClient, ReqwestExtractionClient};
pub use clipboard::{ClipboardError, ClipboardWriter, MemoryClipboard, SystemClipboard};
pub use config::{ConfigError, ConfigSource, ServiceConfig, DEFAULT_SERVICE_URL, SERVICE_URL_ENV};
pub use engine::EngineHandle;
pub use timer::AckTimer;
pub use types::{
    EngineEvent, ExtractError, ExtractRequest, ExtractionResponse, ExtractionStatus, FailureKind,
    HealthReport, RequestId,
};
