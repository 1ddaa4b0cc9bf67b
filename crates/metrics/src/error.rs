use std::net::SocketAddr;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to create metric `{name}`, error: {source}"))]
    CreateMetric { name: &'static str, source: prometheus::Error },

    #[snafu(display("Failed to register metric `{name}`, error: {source}"))]
    RegisterMetric { name: &'static str, source: prometheus::Error },

    #[snafu(display("Could not bind metrics server to {listen_address}, error: {source}"))]
    BindTcpListener { listen_address: SocketAddr, source: std::io::Error },

    #[snafu(display("Error occurs while serving metrics on {listen_address}, error: {source}"))]
    ServeMetrics { listen_address: SocketAddr, source: std::io::Error },
}
