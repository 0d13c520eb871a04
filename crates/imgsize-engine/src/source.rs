//! Source resolution
//!
//! Works out which URL most likely serves the full-size original of an
//! image that the page may be showing through a resizing proxy.

use imgsize_dom::ImageElement;
use url::Url;

/// Path segment marking a resizing proxy URL
pub const PROXY_MARKER: &str = "/tco-images/unsafe/";

const EMBEDDED_HTTPS: &str = "/https://";

/// Whether `url` is a resizing proxy URL
pub fn is_proxy_url(url: &str) -> bool {
    url.contains(PROXY_MARKER)
}

/// Absolute URL embedded in a proxy URL, if any
///
/// `https://cdn.test/tco-images/unsafe/640x0/https://origin.test/a.jpg`
/// yields `https://origin.test/a.jpg`.
pub fn extract_proxied_url(url: &str) -> Option<String> {
    if !is_proxy_url(url) {
        return None;
    }

    let start = url.find(EMBEDDED_HTTPS)?;
    let rest = &url[start + EMBEDDED_HTTPS.len()..];
    if rest.is_empty() {
        return None;
    }

    let embedded = format!("https://{rest}");
    match Url::parse(&embedded) {
        Ok(_) => Some(embedded),
        Err(e) => {
            tracing::debug!("Ignoring malformed embedded URL {}: {}", embedded, e);
            None
        }
    }
}

/// Best-known original URL for `requested_url` shown by `element`
///
/// A non-proxy `src` attribute that differs from the requested URL wins
/// over a URL extracted from a proxy path.
pub fn resolve(requested_url: &str, element: &ImageElement) -> String {
    let mut original = requested_url.to_string();

    if let Some(embedded) = extract_proxied_url(requested_url) {
        original = embedded;
    }

    let src = element.src.as_str();
    if !src.is_empty() && src != requested_url && !is_proxy_url(src) {
        original = src.to_string();
    }

    original
}
