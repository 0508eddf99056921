use std::sync::Arc;

use tokio::sync::RwLock;

use crate::reading::AggregatedData;

/// Application state for the sensor agent
#[derive(Debug, Clone)]
pub struct AgentState {
    // Push target
    pub agent_id: String,
    pub store_api_url: Option<String>,

    // Reader progress
    pub is_reading: bool,
    pub readings_total: u64,
    pub rejected_total: u64,
    pub last_error: Option<String>,

    // Latest aggregated reading
    pub latest_reading: Option<AggregatedData>,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            agent_id: "agent-1".to_string(),
            store_api_url: None,
            is_reading: false,
            readings_total: 0,
            rejected_total: 0,
            last_error: None,
            latest_reading: None,
        }
    }
}

impl AgentState {
    pub fn new(agent_id: String, store_api_url: Option<String>) -> Self {
        Self {
            agent_id,
            store_api_url,
            ..Self::default()
        }
    }

    pub fn record_reading(&mut self, reading: AggregatedData) {
        self.readings_total += 1;
        self.latest_reading = Some(reading);
    }

    pub fn record_rejection(&mut self, reason: String) {
        self.rejected_total += 1;
        self.last_error = Some(reason);
    }
}

/// Thread-safe shared state
pub type SharedState = Arc<RwLock<AgentState>>;

/// Create a new shared state instance
pub fn create_shared_state(state: AgentState) -> SharedState {
    Arc::new(RwLock::new(state))
}
