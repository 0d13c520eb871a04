//! Engine Configuration

use imgsize_net::ClientConfig;

/// What to do with a lookup that settles after a newer one was requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Render every result as it settles; the last to settle stays up
    #[default]
    LastResolvedWins,
    /// Render only the result of the most recent request
    LatestRequestOnly,
}

/// Engine configuration options
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP client settings for the probes
    pub client: ClientConfig,

    /// Handling of out-of-order lookup results
    pub stale_policy: StalePolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    pub fn stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }
}
