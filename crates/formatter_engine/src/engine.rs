use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use formatter_logging::{formatter_debug, formatter_info, formatter_warn};
use tokio::runtime::Runtime;

use crate::{AckTimer, ClipboardWriter, EngineEvent, ExtractionClient, RequestId};

enum EngineCommand {
    Extract { request_id: RequestId, url: String },
    CopyText { text: String },
    ScheduleAckReset { generation: u64, after: Duration },
    ProbeHealth,
}

/// Runs IO on a dedicated tokio runtime thread so the UI loop never blocks.
///
/// Commands are fire-and-forget; results come back as [`EngineEvent`]s.
/// Dropping the handle stops the engine thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn ExtractionClient>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("formatter-engine-worker")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("formatter-engine".to_string())
            .spawn(move || run(runtime, client, clipboard, cmd_rx, event_tx))?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn extract(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Extract {
            request_id,
            url: url.into(),
        });
    }

    pub fn copy_text(&self, text: impl Into<String>) {
        self.send(EngineCommand::CopyText { text: text.into() });
    }

    pub fn schedule_ack_reset(&self, generation: u64, after: Duration) {
        self.send(EngineCommand::ScheduleAckReset { generation, after });
    }

    pub fn probe_health(&self) {
        self.send(EngineCommand::ProbeHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            formatter_warn!("engine thread is gone; command dropped");
        }
    }
}

fn run(
    runtime: Runtime,
    client: Arc<dyn ExtractionClient>,
    clipboard: Arc<dyn ClipboardWriter>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut ack_timer = AckTimer::new(runtime.handle().clone(), event_tx.clone());

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Extract { request_id, url } => {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    formatter_info!("extract request_id={} url_len={}", request_id, url.len());
                    let result = client.extract(&url).await;
                    if let Err(err) = &result {
                        formatter_debug!(
                            "extract request_id={} failed ({}): {}",
                            request_id,
                            err.kind,
                            err.message
                        );
                    }
                    let _ = event_tx.send(EngineEvent::ExtractionCompleted { request_id, result });
                });
            }
            EngineCommand::CopyText { text } => {
                let clipboard = clipboard.clone();
                runtime.spawn_blocking(move || match clipboard.write_text(&text) {
                    Ok(()) => formatter_debug!("copied {} bytes to clipboard", text.len()),
                    Err(err) => formatter_warn!("clipboard write failed: {}", err),
                });
            }
            EngineCommand::ScheduleAckReset { generation, after } => {
                ack_timer.schedule(generation, after);
            }
            EngineCommand::ProbeHealth => {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = client.health().await;
                    match &result {
                        Ok(report) => formatter_info!("service health: {}", report.status),
                        Err(err) => formatter_warn!("service health probe failed: {}", err),
                    }
                    let _ = event_tx.send(EngineEvent::HealthChecked { result });
                });
            }
        }
    }

    ack_timer.cancel();
    formatter_debug!("engine command channel closed; shutting down");
}
