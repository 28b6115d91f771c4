//! Configuration for the E-utilities client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the NCBI E-utilities.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Value sent as the `tool` parameter on every request.
    pub const TOOL_NAME: &str = "paper-finder";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between requests without API key (NCBI allows 3 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(340);

    /// Delay between requests with API key (NCBI allows 10 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(100);

    /// Default number of PMIDs requested from ESearch.
    pub const DEFAULT_MAX_RESULTS: u32 = 100;

    /// Maximum PMIDs per EFetch request.
    pub const EFETCH_BATCH_SIZE: usize = 200;

    /// Transient failure retries.
    pub const MAX_RETRIES: u32 = 3;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional).
    pub api_key: Option<String>,

    /// Contact e-mail sent to NCBI (optional, recommended by their usage policy).
    pub email: Option<String>,

    /// Base URL for E-utilities (for testing with mock servers).
    pub eutils_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay before each request.
    pub rate_limit_delay: Duration,

    /// Maximum number of PMIDs to fetch per query.
    pub max_results: u32,

    /// Retries for transient failures (5xx, connection resets).
    pub max_retries: u32,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The request delay follows the NCBI limits for the key state:
    /// - Without key: 3 req/s
    /// - With key: 10 req/s
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let rate_limit_delay = if api_key.is_some() {
            api::RATE_LIMIT_DELAY_WITH_KEY
        } else {
            api::RATE_LIMIT_DELAY
        };
        Self {
            api_key,
            email: None,
            eutils_url: api::EUTILS_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay,
            max_results: api::DEFAULT_MAX_RESULTS,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            email: None,
            eutils_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            max_results: api::DEFAULT_MAX_RESULTS,
            max_retries: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `NCBI_API_KEY` and `NCBI_EMAIL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = non_empty_var("NCBI_API_KEY");
        let mut config = Self::new(api_key);
        config.email = non_empty_var("NCBI_EMAIL");
        Ok(config)
    }

    /// Set the contact e-mail.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Set the maximum number of results.
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY);
        assert_eq!(config.max_results, api::DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY_WITH_KEY);
    }

    #[test]
    fn test_for_testing_strips_trailing_slash() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.eutils_url, "http://127.0.0.1:9999");
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_email(Some("dev@example.org".to_string()))
            .with_max_results(25);
        assert_eq!(config.email.as_deref(), Some("dev@example.org"));
        assert_eq!(config.max_results, 25);
    }
}
