use async_trait::async_trait;
use tokio::time::Instant;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::ProbeResult;

/// A single reachability check against one target.
///
/// Implementations must never panic on bad input and must always produce a
/// result: transport failures of any kind become `reachable == false`.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Probes targets with one HTTP GET each.
///
/// Any response counts as reachable, whatever its status code. There are no
/// retries, and no timeout unless one is configured on the client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober from the transport settings in `config`.
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder().user_agent(config.user_agent());

        if let Some(timeout) = config.timeout_duration() {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();

        match self.client.get(url).send().await {
            Ok(response) => ProbeResult::up(url, start.elapsed(), response.status().as_u16()),
            Err(err) => {
                let elapsed = start.elapsed();
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                ProbeResult::down(url, elapsed, description)
            }
        }
    }
}
