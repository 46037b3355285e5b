use crate::{
    AppState, DisplayState, Effect, ExtractionOutcome, Msg, ServiceStatus, ACK_WINDOW,
    EMPTY_INPUT_MESSAGE,
};

const GENERATION_FAILED: &str = "Error generating message.";
const REJECTED_FALLBACK: &str = "Failed to extract job details";
const BACKEND_HINT: &str = "Make sure the server is running.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.input().trim().is_empty() {
                state.set_display(DisplayState::Error(EMPTY_INPUT_MESSAGE.to_string()));
                return (state, Vec::new());
            }
            // The sentinel must be visible before the exchange can resolve.
            state.set_display(DisplayState::Processing);
            let url = state.input().to_string();
            let request_id = state.issue_request();
            vec![Effect::Extract { request_id, url }]
        }
        Msg::ExtractionFinished {
            request_id,
            outcome,
        } => {
            if state.finish_request(request_id) {
                state.set_display(describe_outcome(outcome));
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            if !state.display().is_copyable() {
                return (state, Vec::new());
            }
            let text = state.display().as_str().to_string();
            let generation = state.acknowledge();
            vec![
                Effect::WriteClipboard { text },
                Effect::ScheduleAckReset {
                    generation,
                    after: ACK_WINDOW,
                },
            ]
        }
        Msg::AckExpired { generation } => {
            state.expire_ack(generation);
            Vec::new()
        }
        Msg::Started => {
            state.set_service(ServiceStatus::Checking);
            vec![Effect::ProbeService]
        }
        Msg::ServiceProbed { reachable } => {
            state.set_service(if reachable {
                ServiceStatus::Online
            } else {
                ServiceStatus::Unreachable
            });
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn describe_outcome(outcome: ExtractionOutcome) -> DisplayState {
    match outcome {
        ExtractionOutcome::Completed { formatted_message } => {
            match formatted_message.filter(|text| !text.is_empty()) {
                Some(text) => DisplayState::Success(text),
                None => DisplayState::Error(GENERATION_FAILED.to_string()),
            }
        }
        ExtractionOutcome::Rejected { message } => {
            let message = message
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
            DisplayState::Error(format!("Error: {message}"))
        }
        ExtractionOutcome::Failed { message } => {
            let message = if message.is_empty() {
                BACKEND_HINT
            } else {
                message.as_str()
            };
            DisplayState::Error(format!("Backend error: {message}"))
        }
    }
}
