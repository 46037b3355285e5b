use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the URL to the extraction service.
    Extract { request_id: RequestId, url: String },
    /// Write the raw display text to the system clipboard.
    WriteClipboard { text: String },
    /// Reset the copy acknowledgment after `after`, replacing any pending reset.
    ScheduleAckReset { generation: u64, after: Duration },
    /// Check whether the extraction service is reachable.
    ProbeService,
}
