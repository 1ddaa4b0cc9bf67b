use snafu::Snafu;

/// Errors that can occur in the notification crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Failed to create the SMTP transport.
    #[snafu(display("Failed to create SMTP transport for relay `{host}`, error: {source}"))]
    CreateTransport {
        /// Relay host name.
        host: String,
        /// The underlying SMTP error.
        source: lettre::transport::smtp::Error,
    },

    /// An address could not be parsed into a mailbox.
    #[snafu(display("Invalid email address `{value}`, error: {source}"))]
    ParseAddress {
        /// The rejected input.
        value: String,
        /// The underlying parse error.
        source: lettre::address::AddressError,
    },

    /// Failed to build email.
    #[snafu(display("{source}"))]
    BuildEmail {
        /// The underlying message builder error.
        source: lettre::error::Error,
    },

    /// The relay rejected the message or the SMTP session failed.
    #[snafu(display("{source}"))]
    SendEmail {
        /// The underlying SMTP error.
        source: lettre::transport::smtp::Error,
    },
}
