use std::collections::BTreeSet;
use std::time::Duration;

use crate::markup;
use crate::view_model::{AppViewModel, ServiceStatus};

pub type RequestId = u64;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid job link.";
pub const PROCESSING_SENTINEL: &str = "Processing...";

/// How long the "Copied!" acknowledgment stays visible.
pub const ACK_WINDOW: Duration = Duration::from_millis(1500);

/// The single value behind everything shown in the output region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    Processing,
    Success(String),
    Error(String),
}

impl DisplayState {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayState::Empty => "",
            DisplayState::Processing => PROCESSING_SENTINEL,
            DisplayState::Success(text) | DisplayState::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayState::Error(_))
    }

    /// Copy is offered for any finished output, errors included.
    pub fn is_copyable(&self) -> bool {
        !matches!(self, DisplayState::Empty | DisplayState::Processing) && !self.as_str().is_empty()
    }
}

/// Which completions may overwrite the display when requests overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Every completion is applied; the last one to resolve wins.
    #[default]
    LastResolvedWins,
    /// Only the most recently issued request may update the display.
    LatestRequestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    display: DisplayState,
    policy: ResponsePolicy,
    last_request_id: RequestId,
    in_flight: BTreeSet<RequestId>,
    acknowledged: bool,
    ack_generation: u64,
    service: ServiceStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            display_text: self.display.as_str().to_string(),
            markup: markup::render(&self.display),
            processing: self.display == DisplayState::Processing,
            is_error: self.display.is_error(),
            copy_available: self.display.is_copyable(),
            acknowledged: self.acknowledged,
            in_flight: self.in_flight.len(),
            service: self.service,
            dirty: self.dirty,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn set_display(&mut self, display: DisplayState) {
        self.display = display;
        self.dirty = true;
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.in_flight.insert(self.last_request_id);
        self.last_request_id
    }

    /// Retires `request_id` and reports whether its outcome may be applied.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if !self.in_flight.remove(&request_id) {
            return false;
        }
        self.dirty = true;
        match self.policy {
            ResponsePolicy::LastResolvedWins => true,
            ResponsePolicy::LatestRequestOnly => request_id == self.last_request_id,
        }
    }

    /// Raises the acknowledgment flag and returns the generation of this copy.
    pub(crate) fn acknowledge(&mut self) -> u64 {
        self.ack_generation += 1;
        self.acknowledged = true;
        self.dirty = true;
        self.ack_generation
    }

    pub(crate) fn expire_ack(&mut self, generation: u64) {
        if self.acknowledged && generation == self.ack_generation {
            self.acknowledged = false;
            self.dirty = true;
        }
    }

    pub(crate) fn set_service(&mut self, service: ServiceStatus) {
        if self.service != service {
            self.service = service;
            self.dirty = true;
        }
    }
}
