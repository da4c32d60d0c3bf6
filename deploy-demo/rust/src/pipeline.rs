use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;

pub(crate) const PATH: &str = "/test";

#[derive(Serialize)]
pub(crate) struct PipelineCheckDto {
    pub test: &'static str,
    pub endpoint: &'static str,
    pub data: &'static str,
    pub verification: &'static str,
}

const PIPELINE_CHECK: PipelineCheckDto = PipelineCheckDto {
    test: "successful",
    endpoint: PATH,
    data: "Jenkins automatically deployed this application!",
    verification: "If you see this, Jenkins pipeline is working!",
};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(PATH, get(get_endpoint))
}

async fn get_endpoint() -> impl IntoResponse {
    (StatusCode::OK, Json(PIPELINE_CHECK))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{app::testing, infra::env::from_pairs};

    #[tokio::test]
    async fn signals_success() {
        let (state, app) = testing::app(from_pairs([]));

        let response = testing::get(app, "/test").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("successful"));
        assert_eq!(response.json()["endpoint"], "/test");
        assert_eq!(state.deployments.current(), 0);
    }
}
