//! # Notification Crate
//!
//! This crate provides functionality for sending notifications via various
//! channels. Currently supports HTML email delivered through an SMTP relay.
//!
//! ## Features
//!
//! - Welcome, login OTP and password reset templates
//! - SMTP relay integration (implicit TLS, STARTTLS or plaintext)
//! - One connection per message, no pooling
//! - Async/await support

mod error;
pub mod smtp;
pub mod template;

use async_trait::async_trait;
pub use lettre::Address;

pub use self::{error::Error, template::Branding};

/// Represents different types of notifications that can be sent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notification {
    /// Greets a new account and links to the login page.
    Welcome {
        /// The recipient's email address.
        to: Address,
        /// Name used in the greeting.
        username: String,
        /// Login link, already pointing at the recipient.
        login_url: String,
    },

    /// Carries a one-time password for login.
    LoginOtp {
        /// The recipient's email address.
        to: Address,
        /// Name used in the greeting.
        username: String,
        /// The code, rendered as given.
        otp: String,
    },

    /// Links to the password reset page.
    PasswordReset {
        /// The recipient's email address.
        to: Address,
        /// Name used in the greeting.
        username: String,
        /// The reset link, rendered as given.
        reset_url: String,
    },
}

impl Notification {
    /// Short machine readable name, used for logs and metric labels.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "welcome",
            Self::LoginOtp { .. } => "login_otp",
            Self::PasswordReset { .. } => "password_reset",
        }
    }

    #[must_use]
    pub const fn recipient(&self) -> &Address {
        match self {
            Self::Welcome { to, .. } | Self::LoginOtp { to, .. } | Self::PasswordReset { to, .. } => {
                to
            }
        }
    }

    /// Fills the template for this notification.
    #[must_use]
    pub fn render(&self, branding: &Branding) -> Email {
        let (subject, html_body) = match self {
            Self::Welcome { username, login_url, .. } => (
                template::welcome_subject(branding),
                template::welcome_body(branding, username, login_url),
            ),
            Self::LoginOtp { username, otp, .. } => (
                template::login_otp_subject(branding),
                template::login_otp_body(branding, username, otp),
            ),
            Self::PasswordReset { username, reset_url, .. } => (
                template::password_reset_subject(branding),
                template::password_reset_body(branding, username, reset_url),
            ),
        };

        Email { to: self.recipient().clone(), subject, html_body }
    }
}

/// A rendered message ready to be handed to a [`NotificationClient`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Email {
    pub to: Address,

    pub subject: String,

    pub html_body: String,
}

/// Trait for notification clients that can send notifications.
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Sends one rendered email and returns once the transport is done with
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or delivered to the
    /// relay.
    async fn send_email(&self, email: &Email) -> Result<(), Error>;
}

/// Parses an email address.
///
/// # Errors
///
/// Returns [`Error::ParseAddress`] if `value` is not a syntactically valid
/// address.
pub fn parse_address(value: &str) -> Result<Address, Error> {
    use snafu::ResultExt;

    value.trim().parse::<Address>().context(error::ParseAddressSnafu { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branding() -> Branding {
        Branding { product_name: "SMBJugaad LMS".to_string(), copyright_year: 2025 }
    }

    fn alice() -> Address { "a@b.com".parse().unwrap() }

    #[test]
    fn test_render_welcome() {
        let notification = Notification::Welcome {
            to: alice(),
            username: "Alice".to_string(),
            login_url: "http://localhost:3000/login?email=a@b.com".to_string(),
        };

        let email = notification.render(&branding());

        assert_eq!(email.to, alice());
        assert_eq!(email.subject, "Welcome to SMBJugaad LMS 🎉");
        assert!(email.html_body.contains("Alice"));
        assert!(email.html_body.contains("href=\"http://localhost:3000/login?email=a@b.com\""));
        assert_eq!(email.html_body.matches("http://localhost:3000/login?email=a@b.com").count(), 2);
        assert!(email.html_body.contains("© 2025 SMBJugaad LMS"));
    }

    #[test]
    fn test_render_login_otp_keeps_code_verbatim() {
        let notification = Notification::LoginOtp {
            to: alice(),
            username: "Alice".to_string(),
            otp: "00 48-29<13>".to_string(),
        };

        let email = notification.render(&branding());

        assert_eq!(email.subject, "Your SMBJugaad LMS Login OTP");
        assert!(email.html_body.contains("00 48-29<13>"));
        assert!(email.html_body.contains("Hi Alice,"));
        assert!(email.html_body.contains("<strong>5 minutes</strong>"));
    }

    #[test]
    fn test_render_password_reset_keeps_url_verbatim() {
        let reset_url = "not a url?token=a&b=<c>";
        let notification = Notification::PasswordReset {
            to: alice(),
            username: "Alice".to_string(),
            reset_url: reset_url.to_string(),
        };

        let email = notification.render(&branding());

        assert_eq!(email.subject, "Reset your SMBJugaad LMS password");
        assert_eq!(email.html_body.matches(reset_url).count(), 2);
    }

    #[test]
    fn test_kind_labels() {
        let to = alice();
        let username = String::new();

        assert_eq!(
            Notification::Welcome { to: to.clone(), username: username.clone(), login_url: String::new() }
                .kind(),
            "welcome"
        );
        assert_eq!(
            Notification::LoginOtp { to: to.clone(), username: username.clone(), otp: String::new() }
                .kind(),
            "login_otp"
        );
        assert_eq!(
            Notification::PasswordReset { to, username, reset_url: String::new() }.kind(),
            "password_reset"
        );
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address(" a@b.com ").unwrap(), alice());
        assert!(matches!(parse_address("not-an-email"), Err(Error::ParseAddress { .. })));
    }
}
