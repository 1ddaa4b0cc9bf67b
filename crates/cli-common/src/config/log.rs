use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    path::PathBuf,
    str::FromStr,
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing_subscriber::{
    filter::EnvFilter,
    fmt::{format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

// SAFETY: Configuration file needs many bools.
#[allow(clippy::struct_excessive_bools)]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// Directives for `EnvFilter`, overridden by `RUST_LOG` when it is set.
    #[serde(default = "LogConfig::default_log_filters")]
    pub log_filters: String,

    #[serde(default = "LogConfig::default_log_formatter")]
    #[serde_as(as = "DisplayFromStr")]
    pub formatter: LogFormatter,

    // Emit a record when a span closes, carrying `time.busy` and `time.idle`
    #[serde(default = "LogConfig::default_show_fn_latency")]
    pub show_fn_latency: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            log_filters: Self::default_log_filters(),
            formatter: Self::default_log_formatter(),
            show_fn_latency: Self::default_show_fn_latency(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub fn default_log_filters() -> String { "info,lettre=warn,tower_http=info".to_string() }

    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { true }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_log_formatter() -> LogFormatter { LogFormatter::Pretty }

    #[inline]
    #[must_use]
    pub const fn default_show_fn_latency() -> bool { false }

    /// Builds the filter, preferring `RUST_LOG` over the configured
    /// directives.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_filters.as_str()))
    }

    #[must_use]
    pub const fn span_events(&self) -> FmtSpan {
        if self.show_fn_latency {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Installs the global subscriber. Must be called once per process.
    pub fn registry(&self) {
        let span_events = self.span_events();
        let formatter = self.formatter;

        let file_layer = self.file_path.as_ref().and_then(|path| {
            let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
            Some(fmt_layer(Mutex::new(file), formatter, span_events.clone()))
        });

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.emit_journald.then(tracing_journald::layer).and_then(Result::ok))
            .with(file_layer)
            .with(
                self.emit_stdout
                    .then(|| fmt_layer(std::io::stdout, formatter, span_events.clone())),
            )
            .with(self.emit_stderr.then(|| fmt_layer(std::io::stderr, formatter, span_events)))
            .init();
    }
}

#[allow(clippy::type_repetition_in_bounds)]
fn fmt_layer<S, W>(writer: W, formatter: LogFormatter, span_events: FmtSpan) -> BoxedLayer<S>
where
    S: tracing::Subscriber,
    for<'a> S: LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(true)
        .with_span_events(span_events)
        .with_writer(writer);

    match formatter {
        LogFormatter::Pretty => layer.pretty().boxed(),
        LogFormatter::Json => layer.json().flatten_event(true).boxed(),
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LogFormatter {
    Pretty,
    Json,
}

impl FromStr for LogFormatter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            _ => Ok(Self::Pretty),
        }
    }
}

impl Display for LogFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}
