use std::path::PathBuf;

use clap::Parser;
use formatter_core::ResponsePolicy;
use log::LevelFilter;

/// Turn a job posting link into a shareable message.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Extraction service base address; overrides JOB_FORMATTER_API_URL.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Submit this job link once, print the result and exit.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// With --url, print the rendered markup instead of the raw message.
    #[arg(long, requires = "url")]
    pub html: bool,

    /// Ignore responses to requests that a newer submission superseded.
    #[arg(long)]
    pub latest_only: bool,

    /// Log file used by the interactive UI.
    #[arg(long, value_name = "PATH", default_value = "job_formatter.log")]
    pub log_file: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value = "info", value_parser = parse_level_arg)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn policy(&self) -> ResponsePolicy {
        if self.latest_only {
            ResponsePolicy::LatestRequestOnly
        } else {
            ResponsePolicy::LastResolvedWins
        }
    }
}

fn parse_level_arg(value: &str) -> Result<LevelFilter, String> {
    formatter_logging::parse_level(value).ok_or_else(|| format!("unknown log level {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_the_interactive_ui() {
        let cli = Cli::try_parse_from(["formatter_app"]).unwrap();
        assert!(cli.url.is_none());
        assert!(cli.api_url.is_none());
        assert_eq!(cli.policy(), ResponsePolicy::LastResolvedWins);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert_eq!(cli.log_file, PathBuf::from("job_formatter.log"));
    }

    #[test]
    fn headless_flags_parse() {
        let cli = Cli::try_parse_from([
            "formatter_app",
            "--url",
            "https://jobs.example.com/1",
            "--html",
            "--latest-only",
            "--api-url",
            "http://localhost:8000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://jobs.example.com/1"));
        assert!(cli.html);
        assert_eq!(cli.policy(), ResponsePolicy::LatestRequestOnly);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn html_requires_url() {
        assert!(Cli::try_parse_from(["formatter_app", "--html"]).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["formatter_app", "--log-level", "loud"]).is_err());
    }
}
