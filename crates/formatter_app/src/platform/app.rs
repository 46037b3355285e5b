use std::io::stdout;
use std::sync::Arc;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use formatter_core::{update, AppState, Msg, ResponsePolicy};
use formatter_engine::{ServiceConfig, SystemClipboard};
use formatter_logging::formatter_info;
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::ui;
use super::ui::input::KeyAction;

pub fn run_app(policy: ResponsePolicy, config: ServiceConfig) -> anyhow::Result<()> {
    let runner = EffectRunner::new(config, Arc::new(SystemClipboard::new()))?;

    let mut terminal = ratatui::try_init()?;
    let result = execute!(stdout(), EnableBracketedPaste)
        .map_err(anyhow::Error::from)
        .and_then(|()| event_loop(&mut terminal, &runner, AppState::with_policy(policy)));
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    formatter_info!("ui closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runner: &EffectRunner,
    state: AppState,
) -> anyhow::Result<()> {
    let mut state = dispatch(state, Msg::Started, runner);
    let mut force_draw = true;

    loop {
        for msg in runner.poll() {
            state = dispatch(state, msg, runner);
        }

        if state.consume_dirty() || force_draw {
            let view = state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view))?;
            force_draw = false;
        }

        if !event::poll(ui::constants::TICK_INTERVAL)? {
            state = dispatch(state, Msg::Tick, runner);
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ui::input::map_key(key, state.input()) {
                    Some(KeyAction::Quit) => return Ok(()),
                    Some(KeyAction::Send(msg)) => state = dispatch(state, msg, runner),
                    None => {}
                }
            }
            Event::Paste(text) => {
                let msg = ui::input::paste(state.input(), &text);
                state = dispatch(state, msg, runner);
            }
            Event::Resize(..) => force_draw = true,
            _ => {}
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}
