use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse, routing::get, Router};

use crate::{
    app::{AppState, STUDENT_NAME},
    deployment::BuildMetadata,
    health, info,
    infra::clock::Timestamp,
    pipeline,
};

pub(crate) const PATH: &str = "/";
pub(crate) const SUCCESS_MARKER: &str = "Jenkins CI/CD Pipeline Working!";
pub(crate) const BUILD_NUMBER_FALLBACK: &str = "1";

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(PATH, get(get_endpoint))
}

async fn get_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let build = BuildMetadata::resolve(state.env.as_ref());
    let page = HomePage {
        deployment_count: state.deployments.current(),
        server_time: Timestamp::now().display(),
        build_number: build.build_number_or(BUILD_NUMBER_FALLBACK),
        job_name: build.job_name(),
    };
    (StatusCode::OK, Html(page.render()))
}

struct HomePage<'a> {
    deployment_count: u64,
    server_time: String,
    build_number: &'a str,
    job_name: &'a str,
}

impl HomePage<'_> {
    fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Jenkins CI/CD Demo</title>
    <style>
        body {{ font-family: Arial, sans-serif; text-align: center; padding: 50px; }}
        .success {{ color: green; font-size: 24px; margin-bottom: 20px; }}
        .info {{ background: #f5f5f5; padding: 20px; border-radius: 10px; margin: 20px auto; max-width: 600px; }}
        .deploy {{ color: blue; font-weight: bold; }}
    </style>
</head>
<body>
    <div class="success">&#9989; {marker}</div>

    <div class="info">
        <h3>Application Information</h3>
        <p><strong>Student:</strong> {student}</p>
        <p><strong>Deployment Count:</strong> <span class="deploy">{count}</span></p>
        <p><strong>Server Time:</strong> {time}</p>
        <p><strong>Build Number:</strong> {build}</p>
        <p><strong>Jenkins Job:</strong> {job}</p>
    </div>

    <div class="info">
        <h3>Endpoints Available:</h3>
        <p><a href="{health}">{health}</a> - Health check</p>
        <p><a href="{info}">{info}</a> - System info</p>
        <p><a href="{test}">{test}</a> - Test endpoint</p>
    </div>
</body>
</html>
"#,
            marker = SUCCESS_MARKER,
            student = STUDENT_NAME,
            count = self.deployment_count,
            time = self.server_time,
            build = escape_html(self.build_number),
            job = escape_html(self.job_name),
            health = health::PATH,
            info = info::PATH,
            test = pipeline::PATH,
        )
    }
}

fn escape_html(raw: &str) -> String {
    askama_escape::escape(raw, askama_escape::Html).to_string()
}
