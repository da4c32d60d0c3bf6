use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use axum_macros::debug_handler;
use serde::Serialize;
use tracing::info;

use crate::{
    app::{AppState, APP_NAME, STUDENT_NAME},
    deployment::BuildMetadata,
    infra::clock::Timestamp,
};

pub(crate) const PATH: &str = "/info";
pub(crate) const BUILD_NUMBER_FALLBACK: &str = "N/A";
pub(crate) const MESSAGE: &str = "This response changes with each deployment!";

#[derive(Serialize)]
pub(crate) struct InfoDto {
    pub app: &'static str,
    pub student: &'static str,
    pub deployment_number: u64,
    pub server_time: String,
    pub build_number: String,
    pub job_name: String,
    pub message: &'static str,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(PATH, get(get_endpoint))
}

#[debug_handler]
async fn get_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let deployment_number = state.deployments.record();
    let build = BuildMetadata::resolve(state.env.as_ref());

    info!(deployment_number, "recorded deployment");

    let dto = InfoDto {
        app: APP_NAME,
        student: STUDENT_NAME,
        deployment_number,
        server_time: Timestamp::now().iso(),
        build_number: build.build_number_or(BUILD_NUMBER_FALLBACK).to_owned(),
        job_name: build.job_name().to_owned(),
        message: MESSAGE,
    };
    (StatusCode::OK, Json(dto))
}
