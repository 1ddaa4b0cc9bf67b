use std::net::SocketAddr;

use notification::{Address, Branding};

use crate::ApiKey;

#[derive(Clone, Debug)]
pub struct Config {
    pub web: WebConfig,

    pub metrics: MetricsConfig,

    pub smtp: notification::smtp::Config,

    pub mail: MailConfig,

    pub api: ApiConfig,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
    pub listen_address: SocketAddr,
}

#[derive(Clone, Debug)]
pub struct MetricsConfig {
    pub enable: bool,

    pub listen_address: SocketAddr,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub branding: Branding,

    /// Base of the login link in welcome emails, without a trailing slash.
    pub frontend_url: String,
}

impl MailConfig {
    /// Login link embedded in welcome emails. The address is appended as is.
    #[must_use]
    pub fn login_url(&self, email: &Address) -> String {
        format!("{}/login?email={email}", self.frontend_url)
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: ApiKey,

    /// Reported by the health endpoint.
    pub service_name: String,
}
