use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not open config from {}, error: {source}", filename.display()))]
    OpenConfig { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Count not parse config from {}, error: {source}", filename.display()))]
    ParseConfig { filename: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Could not resolve file path {}, error: {source}", file_path.display()))]
    ResolveFilePath { file_path: PathBuf, source: std::io::Error },

    #[snafu(display("Sender address is required, set `mail.sender_address` or `SENDER_EMAIL`"))]
    MissingSenderAddress,

    #[snafu(display("Invalid sender address, error: {source}"))]
    InvalidSenderAddress { source: notification::Error },

    #[snafu(display(
        "Internal API key is required, set `api.internal_api_key` or `INTERNAL_API_KEY`"
    ))]
    MissingApiKey,
}
