use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formatter_core::Msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Send(Msg),
    Quit,
}

/// Maps a key press to an action, given the current contents of the URL field.
pub fn map_key(key: KeyEvent, input: &str) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char('y') if ctrl => Some(KeyAction::Send(Msg::CopyClicked)),
        KeyCode::Char('u') if ctrl => Some(KeyAction::Send(Msg::InputChanged(String::new()))),
        KeyCode::Enter => Some(KeyAction::Send(Msg::SubmitClicked)),
        KeyCode::Backspace => {
            let mut next = input.to_string();
            next.pop()?;
            Some(KeyAction::Send(Msg::InputChanged(next)))
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut next = input.to_string();
            next.push(ch);
            Some(KeyAction::Send(Msg::InputChanged(next)))
        }
        _ => None,
    }
}

/// Appends pasted text to the field; the URL field is a single line.
pub fn paste(input: &str, pasted: &str) -> Msg {
    let mut next = input.to_string();
    next.extend(pasted.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
    Msg::InputChanged(next)
}
