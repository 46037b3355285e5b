use std::time::Duration;

use ratatui::style::Color;

pub const TITLE: &str = "Job Auto Formatter";
pub const INPUT_TITLE: &str = " Job link ";
pub const INPUT_PLACEHOLDER: &str = "Paste job link here...";
pub const SUBMIT_HINT: &str = "[Enter] Generate Job Post";
pub const OUTPUT_TITLE: &str = " Message ";
pub const COPY_LABEL: &str = "[Ctrl+Y] Copy Message";
pub const COPIED_LABEL: &str = "Copied!";
pub const KEY_HELP: &str = "Ctrl+U clear | Esc quit";

pub const COPIED_COLOR: Color = Color::LightGreen;
pub const ERROR_COLOR: Color = Color::LightRed;

/// Idle interval between redraw checks when no terminal input arrives.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
