use anyhow::Result;
use tracing::info;

use crate::{
    app::Container,
    error::ServerError,
    infra::{config::Config, env::ProcessEnv},
};

mod app;
mod deployment;
mod error;
mod health;
mod home;
mod info;
mod infra;
mod pipeline;
mod student;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is the normal case outside local development.
    dotenv::dotenv().ok();

    let config = Config::load(&ProcessEnv)?;
    infra::telemetry::init(config.get_log_level())?;

    info!(%config, "initialized config");

    let router = app::router(Container::new(ProcessEnv));

    info!("initialized router");

    let address = config.get_address();
    let server = axum::Server::try_bind(&address).map_err(|e| ServerError::Bind(address, e))?;

    info!(%address, "listening");

    server
        .serve(router.into_make_service())
        .with_graceful_shutdown(infra::os::shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server stopped");
    Ok(())
}
