use super::dto::{AnalyzeRequest, AnalyzeResponse};
use super::service::AnalysisService;
use crate::common::extract::JsonBody;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::infrastructure::identity::token::IdentityClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

fn cors_headers(origin: &str) -> [(header::HeaderName, String); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type,Authorization".to_string()),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "OPTIONS,POST,GET".to_string()),
    ]
}

/// CORS preflight for `POST /analyze`
pub async fn preflight(State(state): State<AppState>) -> Response {
    (cors_headers(&state.config.allowed_origin), StatusCode::OK).into_response()
}

/// Generate SEO metadata or a blog post from a stored transcript
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis generated and stored", body = AnalyzeResponse),
        (status = 400, description = "Invalid analysis type or body", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 500, description = "Storage, generation or record store failure", body = ErrorBody)
    ),
    tag = "Analysis",
    security(("bearer_auth" = []))
)]
pub async fn analyze(
    State(state): State<AppState>,
    Extension(claims): Extension<IdentityClaims>,
    JsonBody(payload): JsonBody<AnalyzeRequest>,
) -> Response {
    let origin = state.config.allowed_origin.clone();

    match AnalysisService::analyze(state, &claims.sub, payload).await {
        Ok(res) => (cors_headers(&origin), ApiSuccess(res, StatusCode::OK)).into_response(),
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                error!("Analysis failed: {}", e);
            }
            ApiError(e.to_string(), status).into_response()
        }
    }
}
