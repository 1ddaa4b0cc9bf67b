//! Example: Send a login OTP email through an SMTP relay.
//!
//! # Prerequisites
//!
//! 1. An SMTP account allowed to relay (for Gmail, an app password)
//! 2. `SENDER_EMAIL`, `SENDER_APP_PASSWORD` and `RECIPIENT_EMAIL` set
//!
//! # Usage
//!
//! ```bash
//! export SENDER_EMAIL="noreply@yourdomain.com"
//! export SENDER_APP_PASSWORD="app-password"
//! export RECIPIENT_EMAIL="user@example.com"
//! cargo run --example send_otp_email
//! ```

use notification::{
    smtp::{Client, Config, TlsMode},
    Branding, Notification, NotificationClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sender = std::env::var("SENDER_EMAIL")?;
    let password = std::env::var("SENDER_APP_PASSWORD")?;
    let recipient = std::env::var("RECIPIENT_EMAIL")?;

    let config = Config {
        host: "smtp.gmail.com".to_string(),
        port: 465,
        tls: TlsMode::Wrapper,
        username: sender.clone(),
        password,
        sender_address: notification::parse_address(&sender)?,
        sender_name: Some("SMBJugaad LMS".to_string()),
    };
    let client = Client::new(&config)?;

    let notification = Notification::LoginOtp {
        to: notification::parse_address(&recipient)?,
        username: "Example User".to_string(),
        otp: "482913".to_string(),
    };
    let branding = Branding { product_name: "SMBJugaad LMS".to_string(), copyright_year: 2025 };

    tracing::info!("Sending OTP email");
    client.send_email(&notification.render(&branding)).await?;

    tracing::info!("Email sent successfully");
    Ok(())
}
