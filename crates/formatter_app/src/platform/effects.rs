use std::sync::Arc;

use formatter_core::{Effect, ExtractionOutcome, Msg};
use formatter_engine::{
    ClientSettings, ClipboardWriter, EngineEvent, EngineHandle, ExtractError, ExtractionResponse,
    ReqwestExtractionClient, ServiceConfig,
};
use formatter_logging::{formatter_error, formatter_info};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: ServiceConfig, clipboard: Arc<dyn ClipboardWriter>) -> anyhow::Result<Self> {
        let client = ReqwestExtractionClient::new(config, ClientSettings::default())?;
        let engine = EngineHandle::new(Arc::new(client), clipboard)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Extract { request_id, url } => {
                    formatter_info!("Extract request_id={} url={}", request_id, url);
                    self.engine.extract(request_id, url);
                }
                Effect::WriteClipboard { text } => self.engine.copy_text(text),
                Effect::ScheduleAckReset { generation, after } => {
                    self.engine.schedule_ack_reset(generation, after);
                }
                Effect::ProbeService => self.engine.probe_health(),
            }
        }
    }

    /// Drains every engine event that is ready, without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    /// Blocks for the next engine event; `None` if the engine stopped.
    pub fn wait(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ExtractionCompleted { request_id, result } => Msg::ExtractionFinished {
            request_id,
            outcome: map_outcome(request_id, result),
        },
        EngineEvent::AckElapsed { generation } => Msg::AckExpired { generation },
        EngineEvent::HealthChecked { result } => Msg::ServiceProbed {
            reachable: result.is_ok(),
        },
    }
}

fn map_outcome(
    request_id: u64,
    result: Result<ExtractionResponse, ExtractError>,
) -> ExtractionOutcome {
    match result {
        Ok(response) if response.is_error() => {
            formatter_info!("request_id={} rejected by service", request_id);
            ExtractionOutcome::Rejected {
                message: response.message,
            }
        }
        Ok(response) => ExtractionOutcome::Completed {
            formatted_message: response.formatted_message,
        },
        Err(err) => {
            formatter_error!("Extraction error request_id={} ({}): {}", request_id, err.kind, err);
            ExtractionOutcome::Failed {
                message: err.message,
            }
        }
    }
}
