use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User asked to generate the job post from the current input.
    SubmitClicked,
    /// The extraction exchange for `request_id` finished.
    ExtractionFinished {
        request_id: RequestId,
        outcome: ExtractionOutcome,
    },
    /// User clicked Copy.
    CopyClicked,
    /// The acknowledgment window scheduled for `generation` elapsed.
    AckExpired { generation: u64 },
    /// The application finished starting up.
    Started,
    /// Result of the startup reachability probe.
    ServiceProbed { reachable: bool },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How one extraction exchange ended, stripped of transport details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// 2xx with a body whose status is not `"error"`.
    Completed { formatted_message: Option<String> },
    /// 2xx with `status: "error"`.
    Rejected { message: Option<String> },
    /// Transport failure, non-2xx status or an unreadable body.
    Failed { message: String },
}
