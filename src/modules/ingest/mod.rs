use axum::Router;
use axum::middleware;
use axum::routing::post;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/events/storage", post(handler::storage_event))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::bridge_middleware
        ))
}
