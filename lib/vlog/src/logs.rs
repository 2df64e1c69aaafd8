use std::{
    env,
    io::{self, IsTerminal as _},
    panic,
    str::FromStr,
};

use tracing::Subscriber;
use tracing_subscriber::{fmt, registry::LookupSpan, EnvFilter, Layer};

/// Directives used if neither explicit directives nor `RUST_LOG` are provided.
const DEFAULT_LOG_DIRECTIVES: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown log format `{0}`; expected `plain` or `json`")]
pub struct LogFormatError(String);

impl FromStr for LogFormat {
    type Err = LogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(LogFormatError(s.to_owned())),
        }
    }
}

/// Logging output configuration.
#[derive(Debug, Default)]
pub struct Logs {
    format: LogFormat,
    log_directives: Option<String>,
}

impl From<LogFormat> for Logs {
    fn from(format: LogFormat) -> Self {
        Self {
            format,
            log_directives: None,
        }
    }
}

impl Logs {
    pub fn new(format: &str) -> Result<Self, LogFormatError> {
        Ok(format.parse::<LogFormat>()?.into())
    }

    /// Sets `RUST_LOG`-style directives. If not set, `RUST_LOG` is read from the environment.
    pub fn with_log_directives(mut self, log_directives: Option<String>) -> Self {
        self.log_directives = log_directives;
        self
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub(crate) fn build_filter(&self) -> EnvFilter {
        let directives = self
            .log_directives
            .clone()
            .or_else(|| env::var(EnvFilter::DEFAULT_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVES.to_owned());
        EnvFilter::builder().parse_lossy(directives)
    }

    /// Logs panics through `tracing` so that they end up in the configured output.
    pub(crate) fn install_panic_hook(&self) {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            tracing::error!("Panic occurred: {info}");
            previous_hook(info);
        }));
    }

    pub(crate) fn into_layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        match self.format {
            LogFormat::Plain => fmt::layer()
                .with_ansi(io::stdout().is_terminal())
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_log_format() {
        assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Plain);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert!(err.to_string().contains("yaml"), "{err}");
    }

    #[test]
    fn explicit_directives_take_precedence() {
        let logs = Logs::new("json")
            .unwrap()
            .with_log_directives(Some("opbnb_node_fee_model=debug,warn".into()));
        assert_eq!(logs.format(), LogFormat::Json);
        let filter = logs.build_filter().to_string();
        assert!(filter.contains("opbnb_node_fee_model=debug"), "{filter}");
    }
}
