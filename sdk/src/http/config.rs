use crate::error::ApiError;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.aiven.io/v1";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// The base URL of the API, including the version prefix.
    pub api_url: String,
    /// The API token sent with every request.
    pub api_token: Option<String>,
    /// The value of the `User-Agent` header.
    pub user_agent: String,
    /// The deadline applied to every request, none by default.
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            user_agent: format!("service-topics/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

/// Builder for the HTTP client configuration.
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn new() -> Self {
        HttpClientConfigBuilder::default()
    }

    /// Sets the base URL of the API.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.config.api_url = api_url;
        self
    }

    /// Sets the API token used to authenticate requests.
    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.config.api_token = Some(api_token);
        self
    }

    /// Sets the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Sets the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets the request deadline from a human readable value such as `30s` or `1m 30s`.
    pub fn with_timeout_str(self, timeout: &str) -> Result<Self, ApiError> {
        let timeout =
            humantime::parse_duration(timeout).map_err(|_| ApiError::InvalidConfiguration)?;
        Ok(self.with_timeout(timeout))
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}
