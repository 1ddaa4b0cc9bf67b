mod api;
mod error;
mod mail;
mod metrics;
mod smtp;
mod web;

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use gateway_cli_common::config::LogConfig;
use notification::Branding;
use notification_gateway_core::ApiKey;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};

pub use self::{
    api::ApiConfig, error::Error, mail::MailConfig, metrics::MetricsConfig, smtp::SmtpConfig,
    web::WebConfig,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub smtp: SmtpConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Values taken from the command line or the environment. Each one replaces
/// its counterpart from the configuration file when present.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub sender_email: Option<String>,

    pub sender_app_password: Option<String>,

    pub internal_api_key: Option<String>,

    pub frontend_url: Option<String>,
}

impl Config {
    #[inline]
    pub fn default_path() -> PathBuf {
        [
            notification_gateway_core::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(notification_gateway_core::CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let data = std::fs::read_to_string(&path)
                .context(error::OpenConfigSnafu { filename: path.as_ref().to_path_buf() })?;

            serde_yaml::from_str(&data)
                .context(error::ParseConfigSnafu { filename: path.as_ref().to_path_buf() })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// Loads `path` when given. Otherwise the first existing file among
    /// [`Config::default_path`] and the fallback directories is loaded, and
    /// the defaults are used when there is none.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = std::iter::once(Self::default_path())
            .chain(
                notification_gateway_core::fallback_project_config_directories()
                    .into_iter()
                    .map(|dir| dir.join(notification_gateway_core::CONFIG_NAME)),
            )
            .find(|path| path.is_file());

        candidate.map_or_else(|| Ok(Self::default()), Self::load)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        let Overrides { sender_email, sender_app_password, internal_api_key, frontend_url } =
            overrides;

        if let Some(sender_email) = sender_email {
            self.mail.sender_address = Some(sender_email);
        }
        if let Some(password) = sender_app_password {
            self.smtp.password = password;
        }
        if let Some(api_key) = internal_api_key {
            self.api.internal_api_key = Some(api_key);
        }
        if let Some(frontend_url) = frontend_url {
            self.mail.frontend_url = frontend_url;
        }

        self
    }

    /// Validates the configuration and resolves the values the server runs
    /// with.
    pub fn into_server_config(self) -> Result<notification_gateway_core::config::Config, Error> {
        let Self { web, metrics, smtp, mail, api, .. } = self;

        let (smtp, mail) = resolve_relay(smtp, mail)?;

        let api_key = api
            .internal_api_key
            .filter(|api_key| !api_key.is_empty())
            .map(ApiKey::new)
            .context(error::MissingApiKeySnafu)?;

        Ok(notification_gateway_core::config::Config {
            web: web.into(),
            metrics: metrics.into(),
            smtp,
            mail,
            api: notification_gateway_core::config::ApiConfig {
                api_key,
                service_name: api.service_name,
            },
        })
    }

    /// Resolves only the relay and mail settings, for sending without running
    /// the server. The internal API key is not required.
    pub fn into_relay_config(
        self,
    ) -> Result<(notification::smtp::Config, notification_gateway_core::config::MailConfig), Error>
    {
        let Self { smtp, mail, .. } = self;

        resolve_relay(smtp, mail)
    }
}

fn resolve_relay(
    smtp: SmtpConfig,
    mail: MailConfig,
) -> Result<(notification::smtp::Config, notification_gateway_core::config::MailConfig), Error> {
    let sender_address = mail
        .sender_address
        .filter(|address| !address.trim().is_empty())
        .context(error::MissingSenderAddressSnafu)?;
    let sender_address =
        notification::parse_address(&sender_address).context(error::InvalidSenderAddressSnafu)?;

    let smtp = notification::smtp::Config {
        host: smtp.host,
        port: smtp.port,
        tls: smtp.tls,
        username: smtp.username.unwrap_or_else(|| sender_address.to_string()),
        password: smtp.password,
        sender_address,
        sender_name: Some(mail.sender_name.unwrap_or_else(|| mail.product_name.clone())),
    };

    let mail = notification_gateway_core::config::MailConfig {
        branding: Branding { product_name: mail.product_name, copyright_year: Utc::now().year() },
        frontend_url: mail.frontend_url.trim_end_matches('/').to_string(),
    };

    Ok((smtp, mail))
}
