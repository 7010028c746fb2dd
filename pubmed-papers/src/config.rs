//! Client configuration for NCBI E-utilities requests
//!
//! The endpoint base URL is part of the configuration so that tests (and
//! mirrors) can point the client somewhere other than NCBI.

use std::time::Duration;

/// Default E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Tool name reported to NCBI when none is configured
pub const DEFAULT_TOOL: &str = "pubmed-papers";

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubmed_papers::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("get-papers")
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.effective_tool(), "get-papers");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for E-utilities; `esearch.fcgi` and `efetch.fcgi` are resolved against it
    pub base_url: Option<String>,
    /// Contact email sent with each request
    pub email: Option<String>,
    /// Tool name sent with each request
    pub tool: Option<String>,
    /// Request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with NCBI defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different E-utilities base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the contact email NCBI asks clients to identify with
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name NCBI asks clients to identify with
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Override the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubmed-papers/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Query parameters appended to every E-utilities request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("tool".to_string(), self.effective_tool().to_string())];

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params
    }
}
