//! HTTP Client
//!
//! reqwest's blocking client, run on smol's blocking pool so requests
//! suspend the calling task instead of the page thread.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::{Fetcher, Method, NetError, Response, Url, parse_http_url};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max redirects to follow (0 = disable)
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("imgsize/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

/// HTTP client builder
pub struct HttpClientBuilder {
    config: ClientConfig,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Finished configuration
    pub fn config(self) -> ClientConfig {
        self.config
    }

    pub fn build(self) -> Result<HttpFetcher, NetError> {
        HttpFetcher::with_config(self.config)
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetcher backed by a real HTTP client
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create with default settings
    pub fn new() -> Result<Self, NetError> {
        Self::builder().build()
    }

    /// Create a client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Create with custom config
    pub fn with_config(config: ClientConfig) -> Result<Self, NetError> {
        let policy = if config.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(config.max_redirects)
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|e| NetError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn request(&self, method: Method, url: &str) -> Result<Response, NetError> {
        let parsed = parse_http_url(url)?;
        tracing::debug!("HTTP {} {}", method.as_str(), parsed);

        let client = self.client.clone();
        smol::unblock(move || send(&client, method, parsed)).await
    }
}

fn send(client: &Client, method: Method, url: Url) -> Result<Response, NetError> {
    let method_name = match method {
        Method::Get => reqwest::Method::GET,
        Method::Head => reqwest::Method::HEAD,
    };

    let response = client
        .request(method_name, url)
        .send()
        .map_err(|e| NetError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let body = match method {
        Method::Head => Vec::new(),
        Method::Get => response
            .bytes()
            .map_err(|e| NetError::Network(e.to_string()))?
            .to_vec(),
    };

    Ok(Response { status, headers, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_config() {
        let config = HttpFetcher::builder()
            .user_agent("probe/1.0")
            .request_timeout(Duration::from_secs(5))
            .max_redirects(0)
            .config();

        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_redirects, 0);
    }

    #[test]
    fn test_default_user_agent() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("imgsize/"));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let result = smol::block_on(fetcher.head("file:///etc/passwd"));
        assert!(matches!(result, Err(NetError::InvalidUrl(_))));
    }
}
