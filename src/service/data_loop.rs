use tokio::sync::mpsc;

use crate::error::AgentError;
use crate::reading::AggregatedData;
use crate::service::reader::ReaderEvent;
use crate::service::state::SharedState;
use crate::store::StoreClient;

/// Background loop consuming reader events
pub struct AgentLoop {
    state: SharedState,
    store_client: StoreClient,
}

impl AgentLoop {
    pub fn new(state: SharedState, store_client: StoreClient) -> Self {
        Self {
            state,
            store_client,
        }
    }

    /// Run the loop, receiving events from the reader channel
    pub async fn run(&self, mut event_rx: mpsc::Receiver<ReaderEvent>) -> Result<(), AgentError> {
        tracing::info!("Agent loop started");

        {
            let mut state = self.state.write().await;
            state.is_reading = true;
        }

        while let Some(event) = event_rx.recv().await {
            match event {
                ReaderEvent::Reading(reading) => {
                    {
                        let mut state = self.state.write().await;
                        state.record_reading(reading.clone());
                    }
                    self.publish(&reading).await?;
                }
                ReaderEvent::Rejected(reason) => {
                    let mut state = self.state.write().await;
                    state.record_rejection(reason);
                }
                ReaderEvent::Finished { error } => {
                    if let Some(error) = error {
                        let mut state = self.state.write().await;
                        state.last_error = Some(error);
                    }
                    break;
                }
            }
        }

        {
            let mut state = self.state.write().await;
            state.is_reading = false;
        }

        tracing::info!("Agent loop finished");
        Ok(())
    }

    /// Push a reading to the store API, or log it when no store is configured
    async fn publish(&self, reading: &AggregatedData) -> Result<(), AgentError> {
        let (api_url, agent_id) = {
            let state = self.state.read().await;
            (state.store_api_url.clone(), state.agent_id.clone())
        };

        let Some(api_url) = api_url else {
            tracing::info!("{}", serde_json::to_string(reading)?);
            return Ok(());
        };

        let result = self
            .store_client
            .post_agent_data(&api_url, &agent_id, reading)
            .await;

        if let Err(e) = result {
            tracing::error!("Failed to push reading to store: {}", e);
        }

        Ok(())
    }
}
