use crate::error::{RestError, Result};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;
use url::Url;

/// Default connect and overall timeout, in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Client identifier sent with every request
pub const CLIENT_NAME: &str = "swiftype-app-search-rust";

/// Client version sent with every request
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create the HTTP client for App Search requests.
///
/// The connect budget and the overall request budget are enforced
/// independently; the bearer credential is attached as a default header.
pub fn create_rest_client(config: &Config) -> Result<Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|_| RestError::Configuration("API key contains invalid header characters".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert("x-swiftype-client", HeaderValue::from_static(CLIENT_NAME));
    headers.insert("x-swiftype-client-version", HeaderValue::from_static(CLIENT_VERSION));

    ClientBuilder::new()
        .default_headers(headers)
        .user_agent(format!("{}/{}", CLIENT_NAME, CLIENT_VERSION))
        .connect_timeout(config.open_timeout)
        .timeout(config.overall_timeout)
        .build()
        .map_err(|e| RestError::Configuration(format!("failed to create HTTP client: {}", e)))
}

/// Construction options for an App Search client.
///
/// Either `api_endpoint` or `host_identifier` must be set, and `api_key` is
/// always required. Missing timeouts fall back to [`DEFAULT_TIMEOUT`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Full API base URL, e.g. `http://localhost:3002/api/as/v1/`
    pub api_endpoint: Option<String>,
    /// Host identifier (also known as account host key), e.g. `host-c5s2mj`
    pub host_identifier: Option<String>,
    /// Private or public API key
    pub api_key: Option<String>,
    /// Connect timeout
    pub open_timeout: Option<Duration>,
    /// Overall request timeout
    pub overall_timeout: Option<Duration>,
}

impl ClientOptions {
    /// Create options for a hosted account identified by `host_identifier`
    pub fn new(host_identifier: impl Into<String>, api_key: impl Into<String>) -> Self {
        ClientOptions {
            host_identifier: Some(host_identifier.into()),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Use an explicit API endpoint instead of the hosted one
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(api_endpoint.into());
        self
    }

    /// Set the host identifier of a hosted account
    pub fn with_host_identifier(mut self, host_identifier: impl Into<String>) -> Self {
        self.host_identifier = Some(host_identifier.into());
        self
    }

    /// Alias of [`ClientOptions::with_host_identifier`]
    pub fn with_account_host_key(self, account_host_key: impl Into<String>) -> Self {
        self.with_host_identifier(account_host_key)
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the connect timeout
    pub fn with_open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Set the overall request timeout
    pub fn with_overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = Some(timeout);
        self
    }

    /// Validate the options into an immutable [`Config`]
    pub fn build(self) -> Result<Config> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RestError::Configuration("api_key is required".to_string()))?;

        let endpoint = match (self.api_endpoint, self.host_identifier) {
            (Some(endpoint), _) if !endpoint.is_empty() => endpoint,
            (_, Some(host)) if !host.is_empty() => {
                format!("https://{}.api.swiftype.com/api/as/v1/", host)
            }
            _ => {
                return Err(RestError::Configuration(
                    "api_endpoint or host_identifier is required".to_string(),
                ))
            }
        };

        let mut api_endpoint = Url::parse(&endpoint)?;
        if !api_endpoint.path().ends_with('/') {
            let path = format!("{}/", api_endpoint.path());
            api_endpoint.set_path(&path);
        }

        Ok(Config {
            api_endpoint,
            api_key,
            open_timeout: self
                .open_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT)),
            overall_timeout: self
                .overall_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT)),
        })
    }
}

/// Configuration for the App Search client
#[derive(Clone)]
pub struct Config {
    api_endpoint: Url,
    api_key: String,
    open_timeout: Duration,
    overall_timeout: Duration,
}

impl Config {
    /// API base URL, always ending with `/`
    pub fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_str()
    }

    /// API key used for bearer authentication
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn open_timeout(&self) -> Duration {
        self.open_timeout
    }

    pub fn overall_timeout(&self) -> Duration {
        self.overall_timeout
    }

    /// Resolve a path relative to the API endpoint.
    ///
    /// Exactly one `/` separates the endpoint and the path, whether or not
    /// the path starts with one.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_endpoint.as_str(), path.trim_start_matches('/'))
    }
}

// Implement Debug manually to avoid exposing the API key
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_endpoint", &self.api_endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("open_timeout", &self.open_timeout)
            .field("overall_timeout", &self.overall_timeout)
            .finish()
    }
}
