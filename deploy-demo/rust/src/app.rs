use std::sync::Arc;

use axum::Router;

use crate::{
    deployment::DeploymentCounter,
    error, health, home,
    infra::{env::Environment, telemetry},
    info, pipeline, student,
};

pub(crate) const SERVICE_NAME: &str = "deploy-demo";
pub(crate) const APP_NAME: &str = "Jenkins CI/CD Demo";
pub(crate) const STUDENT_NAME: &str = "Bharath RM";

pub(crate) struct Container {
    pub(crate) deployments: DeploymentCounter,
    pub(crate) env: Box<dyn Environment>,
}

impl Container {
    pub(crate) fn new(env: impl Environment + 'static) -> AppState {
        Arc::new(Container {
            deployments: DeploymentCounter::default(),
            env: Box::new(env),
        })
    }
}

pub(crate) type AppState = Arc<Container>;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(info::router())
        .merge(pipeline::router())
        .merge(student::router())
        .fallback(error::not_found)
        .layer(telemetry::tracing_middleware())
        .with_state(state)
}
