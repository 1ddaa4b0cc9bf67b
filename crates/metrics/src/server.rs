use std::{future::Future, net::SocketAddr};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use bytes::Bytes;
use prometheus::{Encoder, TextEncoder};
use snafu::ResultExt;
use tokio::net::TcpListener;

use crate::{error, Error, Metrics};

/// Serves the text exposition format on `GET /metrics` until
/// `shutdown_signal` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn start_metrics_server<M, ShutdownSignal>(
    listen_address: SocketAddr,
    metrics: M,
    shutdown_signal: ShutdownSignal,
) -> Result<(), Error>
where
    M: Metrics + 'static,
    ShutdownSignal: Future<Output = ()> + Send + 'static,
{
    let router = Router::new().route("/metrics", routing::get(gather::<M>)).with_state(metrics);

    let listener = TcpListener::bind(listen_address)
        .await
        .context(error::BindTcpListenerSnafu { listen_address })?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context(error::ServeMetricsSnafu { listen_address })
}

async fn gather<M>(State(metrics): State<M>) -> Response
where
    M: Metrics + 'static,
{
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metrics.gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics, error: {err}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    ([(header::CONTENT_TYPE, encoder.format_type().to_string())], Bytes::from(buffer))
        .into_response()
}
