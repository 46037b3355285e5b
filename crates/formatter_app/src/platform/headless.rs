use std::process::ExitCode;
use std::sync::Arc;

use anyhow::bail;
use formatter_core::{update, AppState, Msg, ResponsePolicy};
use formatter_engine::{MemoryClipboard, ServiceConfig};

use super::effects::EffectRunner;

/// Submits `url` once, waits for the exchange to finish and prints the result.
pub fn run_once(
    url: &str,
    policy: ResponsePolicy,
    html: bool,
    config: ServiceConfig,
) -> anyhow::Result<ExitCode> {
    let runner = EffectRunner::new(config, Arc::new(MemoryClipboard::new()))?;

    let (state, _) = update(AppState::with_policy(policy), Msg::InputChanged(url.to_string()));
    let (mut state, effects) = update(state, Msg::SubmitClicked);
    runner.enqueue(effects);

    while state.view().in_flight > 0 {
        let Some(msg) = runner.wait() else {
            bail!("engine stopped before the request finished");
        };
        let (next, effects) = update(state, msg);
        runner.enqueue(effects);
        state = next;
    }

    let view = state.view();
    if html {
        println!("{}", view.markup.to_html());
    } else {
        println!("{}", view.display_text);
    }

    Ok(if view.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
