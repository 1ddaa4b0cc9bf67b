mod error;
mod service;
mod web;

use std::{net::SocketAddr, sync::Arc};

use futures::{future::BoxFuture, FutureExt};
use gateway_metrics::DefaultMetrics;
use notification::{smtp, Address, Notification, NotificationClient};
use notification_gateway_core::{
    config::{Config, MailConfig},
    ServerInfo,
};
use sigfinn::{ExitStatus, LifecycleManager, Shutdown};
use snafu::ResultExt;

pub use self::{
    error::{Error, Result},
    service::NotificationGateway,
    web::{controller, new_router, ApiDoc, ServiceState},
};

/// # Errors
/// Returns errors when server fails to start
pub async fn serve_with_shutdown(config: Config, server_info: ServerInfo) -> Result<()> {
    let Config { web, metrics, smtp, mail, api } = config;

    let client = initialize_smtp_client(&smtp)?;

    let default_metrics = DefaultMetrics::new()?;

    let service_state = ServiceState::new(client, api, mail, default_metrics.clone());

    let lifecycle_manager = LifecycleManager::<Error>::new();

    let _handle = lifecycle_manager.spawn(
        "Http Server",
        create_web_http_server_future(web.listen_address, service_state, server_info),
    );

    if metrics.enable {
        let _handle = lifecycle_manager.spawn(
            "Metrics server",
            create_metrics_server_future(metrics.listen_address, default_metrics),
        );
    }

    if let Ok(Err(err)) = lifecycle_manager.serve().await {
        tracing::error!("{err}");
        Err(err)
    } else {
        Ok(())
    }
}

/// Sends one welcome email to `to` through the relay described by `smtp`.
/// No API key is involved.
///
/// # Errors
/// Returns an error if the SMTP client cannot be built or the relay rejects
/// the message.
pub async fn send_test_email(smtp: smtp::Config, mail: MailConfig, to: Address) -> Result<()> {
    let client = initialize_smtp_client(&smtp)?;

    let notification = Notification::Welcome {
        username: to.user().to_string(),
        login_url: mail.login_url(&to),
        to,
    };

    client
        .send_email(&notification.render(&mail.branding))
        .await
        .context(error::SendTestEmailSnafu)
}

#[tracing::instrument(
    skip(config),
    fields(
        host = %config.host,
        port = config.port,
        tls = ?config.tls
    )
)]
fn initialize_smtp_client(config: &smtp::Config) -> Result<Arc<dyn NotificationClient>> {
    tracing::info!("Initializing SMTP client");

    let client = smtp::Client::new(config).context(error::CreateSmtpClientSnafu)?;

    Ok(Arc::new(client))
}

fn create_web_http_server_future(
    listen_address: SocketAddr,
    service_state: ServiceState,
    server_info: ServerInfo,
) -> impl FnOnce(Shutdown) -> BoxFuture<'static, ExitStatus<Error>> {
    move |shutdown_signal| {
        async move {
            tracing::info!("Listen Web HTTP server endpoint on {listen_address}");

            let result =
                web::new_api_server(listen_address, service_state, server_info, shutdown_signal)
                    .await;

            match result {
                Ok(()) => {
                    tracing::info!("HTTP server is shut down gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::FatalError(Error::from(err)),
            }
        }
        .boxed()
    }
}

fn create_metrics_server_future<Metrics>(
    listen_address: SocketAddr,
    metrics: Metrics,
) -> impl FnOnce(Shutdown) -> BoxFuture<'static, ExitStatus<Error>>
where
    Metrics: gateway_metrics::Metrics + 'static,
{
    move |signal| {
        async move {
            tracing::info!("Listen metrics endpoint on {listen_address}");
            let result = gateway_metrics::start_metrics_server(listen_address, metrics, signal).await;
            match result {
                Ok(()) => {
                    tracing::info!("Metrics server is shut down gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::FatalError(Error::from(err)),
            }
        }
        .boxed()
    }
}
