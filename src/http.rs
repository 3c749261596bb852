use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::{Result, SnapshotError},
    metric::MetricQuery,
};

/// HTTP-backed metric source with endpoint failover
///
/// Holds a list of equivalent `host:port` candidates for the snapshot
/// management service. Each query walks the candidates in order and
/// returns the first successful body; the timeout bounds every
/// individual attempt.
#[derive(Clone)]
pub struct HttpMetricClient {
    client: Client,
    endpoints: Vec<String>,
}

impl HttpMetricClient {
    /// Create a client over the given endpoint candidates
    ///
    /// Fails with `InvalidConfig` when no candidate is supplied.
    pub fn new(endpoints: Vec<String>, timeout: Duration) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(SnapshotError::InvalidConfig {
                message: "no snapshot service endpoint supplied".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent("snaplist/0.1")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, endpoints })
    }

    fn url_for(&self, endpoint: &str, sub_uri: &str) -> String {
        format!("http://{}{}", endpoint, sub_uri)
    }
}

#[async_trait]
impl MetricQuery for HttpMetricClient {
    async fn query(&self, sub_uri: &str) -> Result<String> {
        let mut last_failure = String::new();

        for endpoint in &self.endpoints {
            let url = self.url_for(endpoint, sub_uri);

            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(endpoint = %endpoint, "metric query answered");
                    return response
                        .text()
                        .await
                        .map_err(|e| SnapshotError::QueryFailed {
                            message: format!("{}: {}", endpoint, e),
                        });
                }
                Ok(response) => {
                    last_failure = format!("{}: unexpected status {}", endpoint, response.status());
                    warn!(endpoint = %endpoint, status = %response.status(), "metric query rejected");
                }
                Err(e) => {
                    last_failure = format!("{}: {}", endpoint, e);
                    warn!(endpoint = %endpoint, error = %e, "metric query unreachable");
                }
            }
        }

        Err(SnapshotError::QueryFailed {
            message: last_failure,
        })
    }

    fn identifier(&self) -> String {
        format!("http://{{{}}}", self.endpoints.join(","))
    }
}
