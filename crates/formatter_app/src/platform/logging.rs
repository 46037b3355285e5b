//! Logger initialization for formatter_app.
//!
//! The interactive UI owns the terminal, so it logs to a file; headless runs
//! log to stderr and keep stdout for the result.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Destination for log output.
pub enum LogDestination {
    /// Truncate and write to the given file.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = formatter_logging::build_config();

    let logger: Box<dyn SharedLogger> = match destination {
        LogDestination::File(path) => match File::create(&path) {
            Ok(file) => WriteLogger::new(level, config, file),
            Err(err) => {
                eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
                return;
            }
        },
        LogDestination::Stderr => {
            TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        }
    };

    let _ = CombinedLogger::init(vec![logger]);
}
