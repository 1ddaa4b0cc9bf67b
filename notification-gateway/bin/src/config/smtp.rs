use notification::smtp::TlsMode;
use notification_gateway_core::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SmtpConfig {
    #[serde(default = "SmtpConfig::default_host")]
    pub host: String,

    #[serde(default = "SmtpConfig::default_port")]
    pub port: u16,

    #[serde(default)]
    pub tls: TlsMode,

    /// Falls back to the sender address when unset.
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: String,
}

impl SmtpConfig {
    #[inline]
    pub fn default_host() -> String { DEFAULT_SMTP_HOST.to_string() }

    #[inline]
    pub const fn default_port() -> u16 { DEFAULT_SMTP_PORT }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            tls: TlsMode::default(),
            username: None,
            password: String::new(),
        }
    }
}
