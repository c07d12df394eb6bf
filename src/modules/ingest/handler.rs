use super::dto::StorageEvent;
use super::service::IngestService;
use crate::common::extract::JsonBody;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, info};

/// Start transcription jobs for newly uploaded videos
#[utoipa::path(
    post,
    path = "/api/v1/events/storage",
    request_body = StorageEvent,
    responses(
        (status = 200, description = "Jobs started for every created object", body = MessageResponse),
        (status = 400, description = "Malformed notification", body = ErrorBody),
        (status = 401, description = "Missing or wrong bridge token", body = ErrorBody),
        (status = 500, description = "Batch aborted at the first failure", body = ErrorBody)
    ),
    tag = "Ingest",
    security(("bridge_token" = []))
)]
pub async fn storage_event(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<StorageEvent>,
) -> impl IntoResponse {
    match IngestService::handle_event(state, event).await {
        Ok(started) => {
            info!("{} transcription jobs started", started.len());
            ApiSuccess(
                MessageResponse {
                    message: "Transcription jobs started".to_string(),
                },
                StatusCode::OK,
            )
            .into_response()
        }
        Err(e) => {
            error!("Error: {}", e);
            ApiError::internal(e.to_string()).into_response()
        }
    }
}
