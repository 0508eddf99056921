use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::models::ErrorResponse;
use crate::reading::AggregatedData;
use crate::service::SharedState;

/// GET /readings/latest - Most recent aggregated reading
pub async fn get_latest_reading(
    State(state): State<SharedState>,
) -> Result<Json<AggregatedData>, (StatusCode, Json<ErrorResponse>)> {
    let state = state.read().await;

    match &state.latest_reading {
        Some(reading) => Ok(Json(reading.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No reading available yet".to_string(),
            }),
        )),
    }
}
