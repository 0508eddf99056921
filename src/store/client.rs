use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::AgentError;
use crate::reading::AggregatedData;

/// HTTP client for pushing readings to the store API
pub struct StoreClient {
    client: Client,
}

#[derive(Debug, Serialize)]
struct AgentDataPayload<'a> {
    agent_id: &'a str,
    data: &'a AggregatedData,
}

impl StoreClient {
    pub fn new() -> Result<Self, AgentError> {
        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        Ok(Self { client })
    }

    /// Client that ignores any proxy configured in the environment
    #[cfg(test)]
    pub(crate) fn without_proxy() -> Self {
        Self {
            client: Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Post one aggregated reading to `{api_url}/agent_data`
    pub async fn post_agent_data(
        &self,
        api_url: &str,
        agent_id: &str,
        data: &AggregatedData,
    ) -> Result<(), AgentError> {
        let url = agent_data_url(api_url);
        let payload = AgentDataPayload { agent_id, data };

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to post agent data: {} - {}", status, body);
            return Err(AgentError::Store(format!("Store API returned {}", status)));
        }

        tracing::debug!("Posted agent data to {}", url);
        Ok(())
    }
}

fn agent_data_url(api_url: &str) -> String {
    format!("{}/agent_data", api_url.trim_end_matches('/'))
}
