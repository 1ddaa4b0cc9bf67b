use snafu::Snafu;

use crate::web;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Error occurs while creating SMTP client, error: {source}"))]
    CreateSmtpClient { source: notification::Error },

    #[snafu(display("{source}"))]
    Metrics { source: gateway_metrics::Error },

    #[snafu(display("{source}"))]
    Web { source: web::Error },

    #[snafu(display("Failed to send test email, error: {source}"))]
    SendTestEmail { source: notification::Error },
}

impl From<gateway_metrics::Error> for Error {
    fn from(source: gateway_metrics::Error) -> Self { Self::Metrics { source } }
}

impl From<web::Error> for Error {
    fn from(source: web::Error) -> Self { Self::Web { source } }
}
