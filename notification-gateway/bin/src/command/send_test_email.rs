use notification::Address;
use snafu::ResultExt;
use tokio::runtime::Runtime;

use crate::{
    config::Config,
    error,
    error::{Error, Result},
};

/// Sends one welcome email to `to` with the configured relay settings.
#[allow(clippy::result_large_err)]
pub fn send_test_email(config: Config, to: Address) -> Result<()> {
    config.log.registry();

    let (smtp, mail) = config.into_relay_config()?;

    tracing::info!(relay = %smtp.host, port = smtp.port, %to, "Sending test email");

    let runtime = Runtime::new().context(error::InitializeTokioRuntimeSnafu)?;
    runtime
        .block_on(notification_gateway_server::send_test_email(smtp, mail, to))
        .map_err(Error::from)?;

    tracing::info!("Test email accepted by the relay");
    Ok(())
}
