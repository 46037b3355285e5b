use thiserror::Error;
use url::Url;

/// Production extraction service, used when nothing else is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://job-description-1wnm.onrender.com";

/// Environment variable consulted when no explicit override is given.
pub const SERVICE_URL_ENV: &str = "JOB_FORMATTER_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid service url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Override,
    Environment,
    Default,
}

/// Extraction service address, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: Url,
    extract_url: Url,
    health_url: Url,
    source: ConfigSource,
}

impl ServiceConfig {
    /// Precedence: explicit override, then environment value, then [`DEFAULT_SERVICE_URL`].
    /// Blank values count as unset.
    pub fn resolve(
        explicit: Option<&str>,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let explicit = explicit.map(str::trim).filter(|value| !value.is_empty());
        let environment = environment.map(str::trim).filter(|value| !value.is_empty());

        let (value, source) = match (explicit, environment) {
            (Some(value), _) => (value, ConfigSource::Override),
            (None, Some(value)) => (value, ConfigSource::Environment),
            (None, None) => (DEFAULT_SERVICE_URL, ConfigSource::Default),
        };
        Self::from_base(value, source)
    }

    /// Resolves against the process environment ([`SERVICE_URL_ENV`]).
    pub fn from_env(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let environment = std::env::var(SERVICE_URL_ENV).ok();
        Self::resolve(explicit, environment.as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn extract_url(&self) -> &Url {
        &self.extract_url
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    fn from_base(value: &str, source: ConfigSource) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            value: value.to_string(),
            reason,
        };

        let trimmed = value.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base_url.scheme())));
        }

        // Plain concatenation keeps any path prefix on the base address.
        let endpoint = |path: &str| {
            Url::parse(&format!("{trimmed}/{path}")).map_err(|err| invalid(err.to_string()))
        };
        Ok(Self {
            extract_url: endpoint("extract")?,
            health_url: endpoint("health")?,
            base_url,
            source,
        })
    }
}
