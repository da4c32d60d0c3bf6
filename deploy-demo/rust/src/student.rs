use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::app::{AppState, APP_NAME, STUDENT_NAME};

pub(crate) const PATH: &str = "/student";

#[derive(Serialize)]
pub(crate) struct StudentDto {
    pub student: &'static str,
    pub app: &'static str,
    pub role: &'static str,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(PATH, get(get_endpoint))
}

async fn get_endpoint() -> impl IntoResponse {
    let dto = StudentDto {
        student: STUDENT_NAME,
        app: APP_NAME,
        role: "student",
    };
    (StatusCode::OK, Json(dto))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{app::testing, infra::env::from_pairs};

    #[tokio::test]
    async fn identifies_student() {
        let (_, app) = testing::app(from_pairs([]));

        let response = testing::get(app, "/student").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Bharath RM"));
        assert_eq!(response.json()["role"], "student");
    }
}
