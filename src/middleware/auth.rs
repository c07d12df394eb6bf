use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // 1. Extract token from header
    let token = match bearer_token(&req) {
        Some(t) => t,
        None => return Err(ApiError("Unauthorized: Missing or invalid token".to_string(), StatusCode::UNAUTHORIZED)),
    };

    // 2. Verify against the user pool
    let claims = state.verifier.verify(&token).map_err(|e| {
        debug!("Rejected token: {}", e);
        ApiError("Unauthorized: Invalid token".to_string(), StatusCode::UNAUTHORIZED)
    })?;

    // 3. Inject claims into request extensions
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Storage notifications are only accepted from the bridge holding `EVENTS_TOKEN`.
pub async fn bridge_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match bearer_token(&req) {
        Some(token) if token == state.config.events_token => Ok(next.run(req).await),
        _ => {
            warn!("Rejected storage notification without a valid bridge token");
            Err(ApiError("Unauthorized: Missing or invalid token".to_string(), StatusCode::UNAUTHORIZED))
        }
    }
}
