use std::{io, io::Write, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use notification_gateway_server::ApiDoc;
use snafu::ResultExt;
use utoipa::OpenApi;

use crate::{
    command::{run_server, send_test_email},
    config::{Config, Overrides},
    error, shadow,
};

#[derive(Debug, Parser)]
#[command(author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about,
    long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        long = "config",
        short = 'c',
        env = "NOTIFICATION_GATEWAY_CONFIG_FILE_PATH",
        help = "Specify a configuration file"
    )]
    config_file_path: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,
}

#[derive(Clone, Debug, Args)]
struct OverrideArgs {
    #[clap(long, env = "SENDER_EMAIL", global = true, help = "Sender email address")]
    sender_email: Option<String>,

    #[clap(
        long,
        env = "SENDER_APP_PASSWORD",
        global = true,
        hide_env_values = true,
        help = "Password for the SMTP relay"
    )]
    sender_app_password: Option<String>,

    #[clap(
        long,
        env = "INTERNAL_API_KEY",
        global = true,
        hide_env_values = true,
        help = "Shared secret expected in the `x-internal-api-key` header"
    )]
    internal_api_key: Option<String>,

    #[clap(long, env = "FRONTEND_URL", global = true, help = "Base URL of the web frontend")]
    frontend_url: Option<String>,
}

impl From<OverrideArgs> for Overrides {
    fn from(
        OverrideArgs { sender_email, sender_app_password, internal_api_key, frontend_url }: OverrideArgs,
    ) -> Self {
        Self { sender_email, sender_app_password, internal_api_key, frontend_url }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(about = "Print version information")]
    Version,

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completion { shell: Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,

    #[clap(about = "Run server")]
    #[command(visible_alias = "run")]
    Server,

    #[clap(about = "Output `OpenApi` document")]
    OpenApi,

    #[clap(about = "Send a welcome email to verify the SMTP settings")]
    SendTestEmail {
        #[clap(long, help = "Recipient of the test email")]
        to: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<error::Error>> {
        match self.command {
            Command::Version => {
                write_stdout(Self::command().render_long_version().as_bytes())?;
            }
            Command::Completion { shell } => {
                let mut command = Self::command();
                let bin_name = command.get_name().to_string();
                clap_complete::generate(shell, &mut command, bin_name, &mut io::stdout());
            }
            Command::DefaultConfig => {
                let config_text =
                    serde_yaml::to_string(&Config::default()).expect("`Config` is serializable");
                write_stdout(config_text.as_bytes())?;
            }
            Command::Server => {
                let config = self.load_config()?;
                run_server(config)?;
            }
            Command::OpenApi => {
                write_stdout(
                    ApiDoc::openapi().to_yaml().expect("ApiDoc should be valid yaml").as_bytes(),
                )?;
            }
            Command::SendTestEmail { ref to } => {
                let to = notification::parse_address(to).context(error::InvalidRecipientSnafu)?;
                let config = self.load_config()?;
                send_test_email(config, to)?;
            }
        }

        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn load_config(&self) -> Result<Config, error::Error> {
        let config = Config::load_or_default(self.config_file_path.as_deref())?;
        Ok(config.with_overrides(self.overrides.clone().into()))
    }
}

#[allow(clippy::result_large_err)]
fn write_stdout(bytes: &[u8]) -> Result<(), error::Error> {
    io::stdout().write_all(bytes).context(error::WriteStdoutSnafu)
}
