use anyhow::Result;
use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub(crate) fn init(log_level: &str) -> Result<()> {
    let filter = filter(log_level)?;

    let fmt_layer = tracing_subscriber::fmt::layer();
    tracing_subscriber::registry().with(fmt_layer).with(filter).try_init()?;

    info!("telemetry initialized");
    Ok(())
}

fn filter(log_level: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(log_level)?)
}

type TraceMiddleware<B> = TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<B>) -> Span>;

pub(crate) fn tracing_middleware<B>() -> TraceMiddleware<B> {
    TraceLayer::new_for_http().make_span_with(make_span as fn(&Request<B>) -> Span)
}

fn make_span<B>(request: &Request<B>) -> Span {
    // Unmatched requests (404s) have no MatchedPath, the raw path is logged instead.
    let matched_path = request.extensions().get::<MatchedPath>().map(MatchedPath::as_str);

    info_span!(
        "http_request",
        method = ?request.method(),
        matched_path,
        path = request.uri().path(),
    )
}
