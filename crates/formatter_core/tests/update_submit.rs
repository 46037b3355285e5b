use std::sync::Once;

use formatter_core::{
    update, AppState, DisplayState, Effect, ExtractionOutcome, Msg, RequestId, ResponsePolicy,
    EMPTY_INPUT_MESSAGE, PROCESSING_SENTINEL,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(formatter_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn finish(state: AppState, request_id: RequestId, outcome: ExtractionOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::ExtractionFinished {
            request_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

fn completed(text: &str) -> ExtractionOutcome {
    ExtractionOutcome::Completed {
        formatted_message: Some(text.to_string()),
    }
}

#[test]
fn empty_and_blank_input_shows_instruction_without_request() {
    init_logging();
    for input in ["", " ", "\t\n  "] {
        let (next, effects) = submit(AppState::new(), input);
        assert_eq!(next.display().as_str(), EMPTY_INPUT_MESSAGE);
        assert!(effects.is_empty(), "no request expected for {input:?}");
        assert_eq!(next.view().in_flight, 0);
    }
}

#[test]
fn submit_shows_processing_before_completion() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "https://jobs.example.com/42");

    assert_eq!(state.display(), &DisplayState::Processing);
    assert_eq!(state.display().as_str(), PROCESSING_SENTINEL);
    assert_eq!(
        effects,
        vec![Effect::Extract {
            request_id: 1,
            url: "https://jobs.example.com/42".to_string(),
        }]
    );
    let view = state.view();
    assert!(view.processing);
    assert!(!view.copy_available);
    assert_eq!(view.in_flight, 1);
    assert!(state.consume_dirty());
}

#[test]
fn url_is_sent_as_typed() {
    init_logging();
    let (_, effects) = submit(AppState::new(), "  https://jobs.example.com ");
    assert_eq!(
        effects,
        vec![Effect::Extract {
            request_id: 1,
            url: "  https://jobs.example.com ".to_string(),
        }]
    );
}

#[test]
fn successful_message_replaces_processing() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://jobs.example.com");
    let state = finish(state, 1, completed("**Hello** world"));

    assert_eq!(
        state.display(),
        &DisplayState::Success("**Hello** world".to_string())
    );
    let view = state.view();
    assert_eq!(view.markup.to_html(), "<strong>Hello</strong> world");
    assert!(!view.markup.to_html().contains('*'));
    assert!(view.copy_available);
    assert!(!view.is_error);
    assert_eq!(view.in_flight, 0);
}

#[test]
fn missing_or_empty_formatted_message_is_generation_error() {
    init_logging();
    for formatted_message in [None, Some(String::new())] {
        let (state, _) = submit(AppState::new(), "https://jobs.example.com");
        let state = finish(
            state,
            1,
            ExtractionOutcome::Completed { formatted_message },
        );
        assert_eq!(state.display().as_str(), "Error generating message.");
        assert!(state.view().is_error);
    }
}

#[test]
fn rejected_outcome_is_prefixed() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://jobs.example.com");
    let state = finish(
        state,
        1,
        ExtractionOutcome::Rejected {
            message: Some("Bad link".to_string()),
        },
    );
    assert_eq!(state.display().as_str(), "Error: Bad link");

    let (state, _) = submit(state, "https://jobs.example.com");
    let state = finish(state, 2, ExtractionOutcome::Rejected { message: None });
    assert_eq!(
        state.display().as_str(),
        "Error: Failed to extract job details"
    );
}

#[test]
fn failures_are_reported_as_backend_errors() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://jobs.example.com");
    let state = finish(
        state,
        1,
        ExtractionOutcome::Failed {
            message: "Server error: 500 Internal Server Error".to_string(),
        },
    );
    let text = state.display().as_str();
    assert_eq!(text, "Backend error: Server error: 500 Internal Server Error");
    assert!(text.contains("500"));
    assert!(text.contains("Internal Server Error"));

    let (state, _) = submit(state, "https://jobs.example.com");
    let state = finish(
        state,
        2,
        ExtractionOutcome::Failed {
            message: String::new(),
        },
    );
    assert_eq!(
        state.display().as_str(),
        "Backend error: Make sure the server is running."
    );
    assert!(state.view().copy_available);
}

#[test]
fn last_resolved_response_wins_by_default() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let (state, effects) = submit(state, "https://b.example.com");
    assert_eq!(
        effects,
        vec![Effect::Extract {
            request_id: 2,
            url: "https://b.example.com".to_string(),
        }]
    );
    assert_eq!(state.view().in_flight, 2);

    // The newer request resolves first, the older one last.
    let state = finish(state, 2, completed("from b"));
    assert_eq!(state.display().as_str(), "from b");
    let state = finish(state, 1, completed("from a"));
    assert_eq!(state.display().as_str(), "from a");
    assert_eq!(state.view().in_flight, 0);
}

#[test]
fn latest_only_policy_drops_stale_responses() {
    init_logging();
    let state = AppState::with_policy(ResponsePolicy::LatestRequestOnly);
    let (state, _) = submit(state, "https://a.example.com");
    let (state, _) = submit(state, "https://b.example.com");

    let state = finish(state, 1, completed("from a"));
    assert_eq!(state.display(), &DisplayState::Processing);
    assert_eq!(state.view().in_flight, 1);

    let state = finish(state, 2, completed("from b"));
    assert_eq!(state.display().as_str(), "from b");
}

#[test]
fn unknown_or_repeated_completions_are_ignored() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let state = finish(state, 7, completed("stray"));
    assert_eq!(state.display(), &DisplayState::Processing);

    let state = finish(state, 1, completed("first"));
    let state = finish(state, 1, completed("again"));
    assert_eq!(state.display().as_str(), "first");
}

#[test]
fn editing_input_does_not_touch_display() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let (mut state, effects) = update(state, Msg::InputChanged("https://b".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.display(), &DisplayState::Processing);
    assert_eq!(state.input(), "https://b");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::InputChanged("https://b".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn rendering_is_idempotent() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://jobs.example.com");
    let state = finish(state, 1, completed("**ROLE** : Dev\n**LOCATION** : Remote"));

    let first = state.view().markup;
    let second = state.view().markup;
    assert_eq!(first, second);
    assert_eq!(first.to_html(), second.to_html());
    assert_eq!(
        first.to_html(),
        "<strong>ROLE</strong> : Dev<br/><strong>LOCATION</strong> : Remote"
    );
}
