use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::debug;

use crate::{
    app::{AppState, SERVICE_NAME},
    infra::clock::Timestamp,
};

pub(crate) const PATH: &str = "/health";

#[derive(Serialize)]
pub(crate) struct HealthDto {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(PATH, get(get_endpoint))
}

async fn get_endpoint() -> impl IntoResponse {
    debug!("health check");
    let dto = HealthDto {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Timestamp::now().iso(),
    };
    (StatusCode::OK, Json(dto))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{app::testing, infra::env::from_pairs};

    #[tokio::test]
    async fn reports_healthy() {
        let (_, app) = testing::app(from_pairs([]));

        let response = testing::get(app, "/health").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("healthy"));
        let json = response.json();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "deploy-demo");
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
