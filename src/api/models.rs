use serde::{Deserialize, Serialize};

// ============= Agent Endpoints =============

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentStatusResponse {
    pub agent_id: String,
    pub store_api_url: Option<String>,
    pub is_reading: bool,
    pub readings_total: u64,
    pub rejected_total: u64,
    pub last_error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub store_api_url: String,
    pub agent_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: String,
    pub agent_id: String,
    pub store_api_url: String,
}

// ============= Error Response =============

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
