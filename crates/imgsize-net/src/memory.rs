//! In-memory fetcher
//!
//! Serves canned responses by URL and records every request. Used for
//! offline pages and for driving the probes in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Fetcher, Method, NetError, Response};

#[derive(Default)]
struct Inner {
    routes: HashMap<String, Result<Response, NetError>>,
    log: Vec<(Method, String)>,
}

/// Fetcher over a URL → response table
///
/// Clones share the same table and request log.
#[derive(Clone, Default)]
pub struct MemoryFetcher {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for `url`
    pub fn insert(&self, url: &str, response: Response) {
        self.lock().routes.insert(url.to_string(), Ok(response));
    }

    /// Fail every request for `url` with `error`
    pub fn insert_error(&self, url: &str, error: NetError) {
        self.lock().routes.insert(url.to_string(), Err(error));
    }

    /// Requests made so far, in order
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.lock().log.clone()
    }

    /// Number of requests made for `url` with `method`
    pub fn request_count(&self, method: Method, url: &str) -> usize {
        self.lock()
            .log
            .iter()
            .filter(|(m, u)| *m == method && u == url)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned table is still a valid table.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Fetcher for MemoryFetcher {
    async fn request(&self, method: Method, url: &str) -> Result<Response, NetError> {
        let mut inner = self.lock();
        inner.log.push((method, url.to_string()));

        match inner.routes.get(url) {
            Some(Ok(response)) => {
                let mut response = response.clone();
                if method == Method::Head {
                    response.body.clear();
                }
                Ok(response)
            }
            Some(Err(error)) => Err(error.clone()),
            None => Err(NetError::Network(format!("unreachable: {url}"))),
        }
    }
}
