use axum::Router;
use axum::routing::{get, post};

use super::handlers::{agent, readings};
use crate::service::SharedState;

/// Create the API router with all endpoints
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Agent info and registration
        .route("/health", get(agent::health))
        .route("/status", get(agent::get_status))
        .route("/register", post(agent::register))
        // Readings
        .route("/readings/latest", get(readings::get_latest_reading))
        // Add state to all routes
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::models::{AgentStatusResponse, ErrorResponse, HealthResponse};
    use crate::reading::{Accelerometer, AggregatedData, Gps, Parking};
    use crate::service::state::{AgentState, create_shared_state};

    #[tokio::test]
    async fn test_health_route() {
        let state = create_shared_state(AgentState::default());
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_latest_reading_route_not_found() {
        let state = create_shared_state(AgentState::default());
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/readings/latest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latest_reading_route_json() {
        let state = create_shared_state(AgentState::default());
        let gps = Gps::new(10.5, 20.5);
        {
            let mut s = state.write().await;
            s.record_reading(AggregatedData::new(
                Accelerometer::new(1, 2, 3),
                gps,
                Parking::new(4, gps),
            ));
        }
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/readings/latest").await;

        response.assert_status_ok();
        let reading = response.json::<AggregatedData>();
        assert_eq!(reading.accelerometer, Accelerometer::new(1, 2, 3));
        assert_eq!(reading.parking.empty_count, 4);
        assert_eq!(reading.parking.gps, gps);
    }

    #[tokio::test]
    async fn test_register_then_status() {
        let state = create_shared_state(AgentState::default());
        let server = TestServer::new(create_router(state)).unwrap();

        server
            .post("/register")
            .json(&json!({ "store_api_url": "http://localhost:8000", "agent_id": "bus-7" }))
            .await
            .assert_status_ok();

        let status = server.get("/status").await.json::<AgentStatusResponse>();
        assert_eq!(status.agent_id, "bus-7");
        assert_eq!(status.store_api_url.as_deref(), Some("http://localhost:8000"));
        assert!(!status.is_reading);
    }

    #[tokio::test]
    async fn test_error_and_health_bodies() {
        let state = create_shared_state(AgentState::default());
        let server = TestServer::new(create_router(state)).unwrap();

        let health = server.get("/health").await.json::<HealthResponse>();
        assert_eq!(health.status, "ok");

        let response = server.get("/readings/latest").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.json::<ErrorResponse>().error.contains("No reading"));
    }
}
