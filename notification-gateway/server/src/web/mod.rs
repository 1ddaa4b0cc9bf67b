pub mod controller;
pub mod error;
pub mod extractor;

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{
    extract::Request, http, response::IntoResponse, routing, Extension, Json, Router, ServiceExt,
};
use gateway_axum::json_response;
use gateway_metrics::DefaultMetrics;
use notification::NotificationClient;
use notification_gateway_core::{
    config::{ApiConfig, MailConfig},
    ServerInfo,
};
use snafu::ResultExt;
use tokio::net::TcpListener;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer, normalize_path::NormalizePathLayer, trace::TraceLayer,
};
use utoipa::OpenApi;

pub use self::{controller::ApiDoc, error::Error};
use crate::service::NotificationGateway;

/// Builds the application router without path normalization.
pub fn new_router(service_state: &ServiceState, server_info: ServerInfo) -> Router {
    let middleware_stack =
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CompressionLayer::new());

    Router::new()
        .route("/info", routing::get(controller::server_info))
        .route("/openapi.json", routing::get(openapi_json))
        .merge(controller::api_router(service_state))
        .layer(Extension(server_info))
        .layer(middleware_stack)
        .fallback(fallback)
}

pub async fn new_api_server<ShutdownSignal>(
    socket_address: SocketAddr,
    service_state: ServiceState,
    server_info: ServerInfo,
    shutdown_signal: ShutdownSignal,
) -> Result<(), Error>
where
    ShutdownSignal: Future<Output = ()> + Send + 'static,
{
    let router = {
        let router = new_router(&service_state, server_info);
        let router = NormalizePathLayer::trim_trailing_slash().layer(router);
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router)
    };

    let listener = TcpListener::bind(&socket_address)
        .await
        .context(error::BindTcpServerSnafu { socket_address })?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context(error::ServeHttpServerSnafu)
}

// SAFETY: `axum` handler must be async
#[allow(clippy::unused_async)]
async fn fallback(uri: http::Uri) -> axum::response::Response {
    json_response! {
        status: http::StatusCode::NOT_FOUND,
        detail: format!("No route for {uri}")
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> { Json(ApiDoc::openapi()) }

#[derive(Clone)]
pub struct ServiceState {
    pub gateway: NotificationGateway,
    pub service_name: String,
}

impl ServiceState {
    /// Create a new service state
    #[must_use]
    pub fn new(
        client: Arc<dyn NotificationClient>,
        ApiConfig { api_key, service_name }: ApiConfig,
        mail: MailConfig,
        metrics: DefaultMetrics,
    ) -> Self {
        let gateway = NotificationGateway::new(client, api_key, mail, metrics);

        Self { gateway, service_name }
    }
}
