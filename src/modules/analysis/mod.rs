use axum::Router;
use axum::routing::post;
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod prompts;
pub mod schema;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    // Browsers send the preflight without credentials, so OPTIONS stays outside auth.
    Router::new().route(
        "/analyze",
        post(handler::analyze)
            .route_layer(middleware::from_fn_with_state(
                state,
                crate::middleware::auth::auth_middleware
            ))
            .options(handler::preflight),
    )
}
