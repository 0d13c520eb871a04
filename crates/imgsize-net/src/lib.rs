//! imgsize Networking
//!
//! The fetch surface the probes run on: a `Fetcher` capability, an HTTP
//! implementation on reqwest, and an in-memory one.

mod client;
mod memory;

pub use client::{ClientConfig, HttpClientBuilder, HttpFetcher};
pub use memory::MemoryFetcher;
pub use url::Url;

/// Request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
        }
    }
}

/// Issue requests for resources
///
/// Implementations settle every request with a `Response` or a `NetError`;
/// callers decide what a failure degrades to.
// Fetchers run on a single-threaded executor; their futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Make a request
    async fn request(&self, method: Method, url: &str) -> Result<Response, NetError>;

    /// Fetch headers only
    async fn head(&self, url: &str) -> Result<Response, NetError> {
        self.request(Method::Head, url).await
    }

    /// Fetch the full resource
    async fn get(&self, url: &str) -> Result<Response, NetError> {
        self.request(Method::Get, url).await
    }
}

/// HTTP Response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// 200 response with a body
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body,
        }
    }

    /// Response with a status and no body
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Check if response is OK (2xx)
    pub fn ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Get header value, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Network error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Client error: {0}")]
    Client(String),
}

/// Parse an absolute http(s) URL
pub fn parse_http_url(url: &str) -> Result<Url, NetError> {
    let parsed = Url::parse(url).map_err(|e| NetError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(NetError::InvalidUrl(format!("unsupported scheme {scheme}: {url}"))),
    }
}
