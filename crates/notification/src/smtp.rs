//! SMTP relay client.
//!
//! Every call to [`NotificationClient::send_email`] opens its own connection,
//! authenticates, transmits one message and quits.

use std::fmt;

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::{error, Email, Error, NotificationClient};

/// How the connection to the relay is secured.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// TLS from the first byte, usually on port 465.
    #[default]
    Wrapper,

    /// Plain connection upgraded with `STARTTLS`, usually on port 587.
    StartTls,

    /// No encryption. Only meant for local relays such as Mailpit.
    Plaintext,
}

/// Configuration for the SMTP client.
#[derive(Clone)]
pub struct Config {
    pub host: String,

    pub port: u16,

    pub tls: TlsMode,

    /// Login name; authentication is skipped when empty.
    pub username: String,

    pub password: String,

    /// Sender address, also used in the `From` header.
    pub sender_address: Address,

    /// Display name of the `From` header.
    pub sender_name: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("username", &self.username)
            .field("password", &"********")
            .field("sender_address", &self.sender_address)
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

/// SMTP client for sending emails.
#[derive(Clone)]
pub struct Client {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl Client {
    /// Creates a new SMTP client. No connection is made until a message is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS parameters for `host` cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use notification::smtp::{Client, Config, TlsMode};
    ///
    /// # fn example() -> Result<(), notification::Error> {
    /// let config = Config {
    ///     host: "smtp.gmail.com".to_string(),
    ///     port: 465,
    ///     tls: TlsMode::Wrapper,
    ///     username: "sender@example.com".to_string(),
    ///     password: "app-password".to_string(),
    ///     sender_address: notification::parse_address("sender@example.com")?,
    ///     sender_name: Some("Example".to_string()),
    /// };
    ///
    /// let client = Client::new(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self, Error> {
        let Config { host, port, tls, username, password, sender_address, sender_name } = config;

        tracing::info!(%host, port, ?tls, "Using SMTP relay");

        let builder = match tls {
            TlsMode::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .context(error::CreateTransportSnafu { host: host.clone() })?,
            TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .context(error::CreateTransportSnafu { host: host.clone() })?,
            TlsMode::Plaintext => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host),
        }
        .port(*port);

        let builder = if username.is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        };

        Ok(Self {
            transport: builder.build(),
            sender: Mailbox::new(sender_name.clone(), sender_address.clone()),
        })
    }
}

#[async_trait]
impl NotificationClient for Client {
    async fn send_email(&self, email: &Email) -> Result<(), Error> {
        let message = build_message(&self.sender, email)?;

        let response = self.transport.send(message).await.context(error::SendEmailSnafu)?;

        tracing::debug!(to = %email.to, code = %response.code(), "Relay accepted message");
        Ok(())
    }
}

/// Builds a `multipart/alternative` message carrying the HTML body.
///
/// # Errors
///
/// Returns an error if the message cannot be assembled.
fn build_message(sender: &Mailbox, email: &Email) -> Result<Message, Error> {
    Message::builder()
        .from(sender.clone())
        .to(Mailbox::new(None, email.to.clone()))
        .subject(email.subject.as_str())
        .multipart(MultiPart::alternative().singlepart(SinglePart::html(email.html_body.clone())))
        .context(error::BuildEmailSnafu)
}
