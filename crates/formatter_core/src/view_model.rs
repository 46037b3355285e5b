use crate::TrustedMarkup;

/// Reachability of the extraction service, as reported by the startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    /// Raw display text; this is what the copy action writes.
    pub display_text: String,
    pub markup: TrustedMarkup,
    pub processing: bool,
    pub is_error: bool,
    pub copy_available: bool,
    pub acknowledged: bool,
    pub in_flight: usize,
    pub service: ServiceStatus,
    pub dirty: bool,
}
