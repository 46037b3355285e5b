mod app;
mod cli;
mod effects;
mod headless;
mod logging;
mod ui;

use std::process::ExitCode;

use formatter_engine::ServiceConfig;
use formatter_logging::formatter_info;

pub use cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // The terminal belongs to the UI, so interactive sessions log to a file.
    let destination = match cli.url {
        Some(_) => logging::LogDestination::Stderr,
        None => logging::LogDestination::File(cli.log_file.clone()),
    };
    logging::initialize(destination, cli.log_level);

    let config = ServiceConfig::from_env(cli.api_url.as_deref())?;
    formatter_info!(
        "extraction service {} (from {:?})",
        config.base_url(),
        config.source()
    );

    match cli.url.as_deref() {
        Some(url) => headless::run_once(url, cli.policy(), cli.html, config),
        None => {
            app::run_app(cli.policy(), config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
