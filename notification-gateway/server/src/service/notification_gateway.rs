use std::sync::Arc;

use gateway_metrics::{DefaultMetrics, DispatchOutcome};
use notification::{Address, Notification, NotificationClient};
use notification_gateway_core::{
    config::MailConfig,
    model::{OtpRequest, PasswordResetRequest, WelcomeRequest},
    ApiKey,
};

use super::error::{Error, Result};

/// Authorizes callers, renders the fixed templates and hands them to the
/// notification client. Holds no per-request state.
#[derive(Clone)]
pub struct NotificationGateway {
    client: Arc<dyn NotificationClient>,
    api_key: ApiKey,
    mail: MailConfig,
    metrics: DefaultMetrics,
}

impl NotificationGateway {
    #[inline]
    #[must_use]
    pub fn new(
        client: Arc<dyn NotificationClient>,
        api_key: ApiKey,
        mail: MailConfig,
        metrics: DefaultMetrics,
    ) -> Self {
        Self { client, api_key, mail, metrics }
    }

    /// Checks the value of the API key header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] when the header is absent or does not
    /// match the configured secret.
    pub fn authorize(&self, presented: Option<&str>) -> Result<()> {
        if self.api_key.verify(presented) {
            return Ok(());
        }

        self.metrics.record_unauthorized();
        Err(Error::Unauthorized)
    }

    #[must_use]
    pub fn login_url(&self, email: &Address) -> String { self.mail.login_url(email) }

    /// # Errors
    ///
    /// Returns [`Error::Dispatch`] if the email cannot be sent.
    #[tracing::instrument(skip_all, fields(to = %request.email))]
    pub async fn send_welcome(&self, request: WelcomeRequest) -> Result<()> {
        let WelcomeRequest { email, username } = request;
        let login_url = self.login_url(&email);

        self.dispatch(Notification::Welcome { to: email, username, login_url }).await
    }

    /// # Errors
    ///
    /// Returns [`Error::Dispatch`] if the email cannot be sent.
    #[tracing::instrument(skip_all, fields(to = %request.email))]
    pub async fn send_otp(&self, request: OtpRequest) -> Result<()> {
        let OtpRequest { email, username, otp } = request;

        self.dispatch(Notification::LoginOtp { to: email, username, otp }).await
    }

    /// # Errors
    ///
    /// Returns [`Error::Dispatch`] if the email cannot be sent.
    #[tracing::instrument(skip_all, fields(to = %request.email))]
    pub async fn send_password_reset(&self, request: PasswordResetRequest) -> Result<()> {
        let PasswordResetRequest { email, username, reset_url } = request;

        self.dispatch(Notification::PasswordReset { to: email, username, reset_url }).await
    }

    async fn dispatch(&self, notification: Notification) -> Result<()> {
        let kind = notification.kind();
        let email = notification.render(&self.mail.branding);

        match self.client.send_email(&email).await {
            Ok(()) => {
                self.metrics.record_dispatch(kind, DispatchOutcome::Success);
                tracing::info!(kind, to = %email.to, "Email sent");
                Ok(())
            }
            Err(source) => {
                self.metrics.record_dispatch(kind, DispatchOutcome::Failure);
                tracing::error!(kind, to = %email.to, error = %source, "Failed to send email");
                Err(Error::Dispatch { kind, source })
            }
        }
    }
}
