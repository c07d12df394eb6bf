use super::dto::AuthRequest;
use super::service::{AuthOutcome, AuthService};
use crate::common::extract::JsonBody;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

/// Sign up or sign in against the user directory
#[utoipa::path(
    post,
    path = "/api/v1/auth",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "SignupResponse for signup, SigninResponse for signin"),
        (status = 400, description = "Invalid action, credentials, or rejected by the directory", body = ErrorBody),
        (status = 500, description = "Directory unreachable", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn auth(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthRequest>,
) -> impl IntoResponse {
    match AuthService::handle(state, payload).await {
        Ok(AuthOutcome::Registered(res)) => ApiSuccess(res, StatusCode::OK).into_response(),
        Ok(AuthOutcome::SignedIn(res)) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                error!("Identity directory call failed: {}", e);
            }
            ApiError(e.to_string(), status).into_response()
        }
    }
}
