use std::net::{IpAddr, SocketAddr};

use notification_gateway_core::{DEFAULT_METRICS_HOST, DEFAULT_METRICS_PORT};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enable: bool,

    #[serde(default = "MetricsConfig::default_host")]
    pub host: IpAddr,

    #[serde(default = "MetricsConfig::default_port")]
    pub port: u16,
}

impl MetricsConfig {
    #[inline]
    pub const fn default_host() -> IpAddr { DEFAULT_METRICS_HOST }

    #[inline]
    pub const fn default_port() -> u16 { DEFAULT_METRICS_PORT }

    #[inline]
    pub const fn socket_address(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enable: false, host: Self::default_host(), port: Self::default_port() }
    }
}

impl From<MetricsConfig> for notification_gateway_core::config::MetricsConfig {
    fn from(config: MetricsConfig) -> Self {
        Self { enable: config.enable, listen_address: config.socket_address() }
    }
}
