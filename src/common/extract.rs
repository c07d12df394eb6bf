use crate::common::response::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` whose rejections render as `{"error": ...}` with 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
