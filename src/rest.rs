use crate::client::{create_rest_client, ClientOptions, Config};
use crate::error::{RestError, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// App Search API client.
///
/// Every operation issues exactly one blocking request and returns the decoded
/// JSON response. The configuration is immutable, so a single client can be
/// cloned or shared across threads.
#[derive(Clone, Debug)]
pub struct Client {
    http: HttpClient,
    config: Config,
}

impl Client {
    /// Create a new client from construction options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swiftype_app_search::{Client, ClientOptions};
    ///
    /// let client = Client::new(ClientOptions::new("host-c5s2mj", "private-xxxxxxxx"))?;
    /// # Ok::<(), swiftype_app_search::RestError>(())
    /// ```
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_config(options.build()?)
    }

    /// Create a new client from an already validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let http = create_rest_client(&config)?;
        Ok(Client { http, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None::<&()>)
    }

    pub(crate) fn get_with<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::GET, path, Some(params))
    }

    pub(crate) fn post<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::POST, path, Some(params))
    }

    pub(crate) fn put<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::PUT, path, Some(params))
    }

    pub(crate) fn patch<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::PATCH, path, Some(params))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None::<&()>)
    }

    pub(crate) fn delete_with<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::DELETE, path, Some(params))
    }

    /// Execute an App Search API request and return the decoded JSON body
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PUT, PATCH or DELETE)
    /// * `path` - Path relative to the configured API endpoint
    /// * `params` - Optional request body, sent as JSON for every method
    ///
    /// # Returns
    /// The response body as a JSON value; an empty body decodes to `null`
    pub fn request<P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        const SUPPORTED: [Method; 5] = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ];
        if !SUPPORTED.contains(&method) {
            return Err(RestError::Argument(format!(
                "unsupported HTTP method: {}",
                method
            )));
        }

        let url = self.config.url_for(path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(params) = params {
            let body = serde_json::to_vec(params)?;
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let start = Instant::now();
        let http_response = request.send().map_err(|e| {
            tracing::debug!(%method, path, error = %e, "request failed");
            RestError::from(e)
        })?;
        let status = http_response.status();
        let body = http_response.bytes()?;

        tracing::debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "request completed"
        );

        if !status.is_success() {
            return Err(RestError::from_status(status, &body));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request and unmarshal the response into the target type
    pub fn apply<T, P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let value = self.request(method, path, params)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::new(
            ClientOptions::default()
                .with_api_key("private-key")
                .with_api_endpoint("http://127.0.0.1:1/api/as/v1/"),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = test_client();
        assert_eq!(client.config().api_endpoint(), "http://127.0.0.1:1/api/as/v1/");
    }

    #[test]
    fn test_client_missing_key() {
        let result = Client::new(ClientOptions::default().with_api_endpoint("http://localhost/"));
        assert!(matches!(result, Err(RestError::Configuration(_))));
    }

    #[test]
    fn test_unsupported_method() {
        let client = test_client();
        let result = client.request(Method::HEAD, "engines", None::<&()>);
        assert!(matches!(result, Err(RestError::Argument(_))));
    }

    #[test]
    fn test_connection_refused() {
        let client = test_client();
        let result = client.get("engines");
        assert!(matches!(result, Err(RestError::Connection(_))));
    }
}
