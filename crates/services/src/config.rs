use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "ANALYZER_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Upper bound on waiting for an upload; generous to ride out a slow-starting backend.
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_ANALYZE_TIMEOUT: Duration = Duration::from_secs(60);
/// The health probe only feeds a status badge, so it gives up quickly.
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct BackendConfig {
    base_url: Url,
    pub upload_timeout: Duration,
    pub analyze_timeout: Duration,
    pub health_timeout: Duration,
}

impl BackendConfig {
    /// Read the backend location from `ANALYZER_API_URL`, falling back to a
    /// local development server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configured value is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::new(&raw)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when `raw` is not an http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut base_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            raw: trimmed.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                raw: trimmed.to_string(),
            });
        }
        // Endpoints are joined relative to the base, which needs a trailing slash
        // to keep any path prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
            analyze_timeout: DEFAULT_ANALYZE_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeouts(mut self, upload: Duration, analyze: Duration) -> Self {
        self.upload_timeout = upload;
        self.analyze_timeout = analyze;
        self
    }

    #[must_use]
    pub fn with_health_timeout(mut self, health: Duration) -> Self {
        self.health_timeout = health;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path such as `api/upload/` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default backend url should be valid"),
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
            analyze_timeout: DEFAULT_ANALYZE_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }
}
