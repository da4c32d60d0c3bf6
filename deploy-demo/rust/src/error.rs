use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct AppError {
    pub message: &'static str,
}

impl AppError {
    pub(crate) fn new(message: &'static str) -> Json<AppError> {
        Json(AppError { message })
    }
}

pub(crate) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, AppError::new("not found"))
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum ServerError {
    #[error("failed to bind {0}: {1}")]
    Bind(SocketAddr, hyper::Error),
    #[error("server failed: {0}")]
    Serve(hyper::Error),
}
