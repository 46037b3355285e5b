use std::sync::mpsc;
use std::time::Duration;

use formatter_logging::formatter_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::EngineEvent;

/// One-shot timer behind the copy acknowledgment.
///
/// At most one reset is pending: scheduling aborts the previous task first,
/// so a stale timer can never clear a flag raised by a newer copy.
pub struct AckTimer {
    runtime: Handle,
    event_tx: mpsc::Sender<EngineEvent>,
    pending: Option<JoinHandle<()>>,
}

impl AckTimer {
    pub fn new(runtime: Handle, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            event_tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, generation: u64, after: Duration) {
        self.cancel();
        let event_tx = self.event_tx.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            formatter_trace!("ack window elapsed generation={}", generation);
            let _ = event_tx.send(EngineEvent::AckElapsed { generation });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AckTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
