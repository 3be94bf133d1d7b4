//! Configuration for the content API and outbound requests

use std::time::Duration;

/// Default GitHub API base, overridable for GitHub Enterprise hosts
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the repository content API.
///
/// Assembled once from CLI flags and environment; everything downstream
/// receives it as an explicit input, there is no process-wide configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL, without a trailing slash
    pub api_url: String,
    /// Organization (owner) whose repositories are audited
    pub org: String,
    /// API token sent as `Authorization: token {t}`; optional for public
    /// repositories
    pub token: Option<String>,
    /// Per-request timeout, shared with the registry client
    pub timeout: Duration,
}

impl GithubConfig {
    /// Configuration for an organization with defaults for everything else
    pub fn new(org: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            org: org.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the API base URL (builder pattern)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the API token (builder pattern)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
