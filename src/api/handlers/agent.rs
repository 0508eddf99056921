use axum::Json;
use axum::extract::State;

use crate::api::models::*;
use crate::service::SharedState;

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /status - Reader progress and push target
pub async fn get_status(State(state): State<SharedState>) -> Json<AgentStatusResponse> {
    let state = state.read().await;

    Json(AgentStatusResponse {
        agent_id: state.agent_id.clone(),
        store_api_url: state.store_api_url.clone(),
        is_reading: state.is_reading,
        readings_total: state.readings_total,
        rejected_total: state.rejected_total,
        last_error: state.last_error.clone(),
    })
}

/// POST /register - Point the agent at a store API
pub async fn register(
    State(state): State<SharedState>,
    Json(request): Json<RegisterRequest>,
) -> Json<RegisterResponse> {
    let mut state = state.write().await;

    state.store_api_url = Some(request.store_api_url.clone());
    if let Some(agent_id) = request.agent_id {
        state.agent_id = agent_id;
    }

    tracing::info!(
        "Registered with store API: {}, agent_id: {}",
        request.store_api_url,
        state.agent_id
    );

    Json(RegisterResponse {
        status: "registered".to_string(),
        agent_id: state.agent_id.clone(),
        store_api_url: request.store_api_url,
    })
}
