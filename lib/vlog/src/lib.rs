//! This crate contains the observability subsystem.
//! It is responsible for providing a centralized interface for consistent observability configuration.

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::logs::{LogFormat, LogFormatError, Logs};

pub mod logs;

/// Builder for the observability subsystem.
/// Currently capable of configuring logging output.
#[derive(Debug, Default)]
pub struct ObservabilityBuilder {
    logs: Option<Logs>,
}

/// Guard for the observability subsystem. Must be kept alive for the lifetime of the process.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _private: (),
}

impl ObservabilityBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logs(mut self, logs: Option<Logs>) -> Self {
        self.logs = logs;
        self
    }

    /// Tries to initialize the observability subsystem. Returns an error if it's already initialized.
    /// This is mostly useful in tests.
    pub fn try_build(self) -> anyhow::Result<ObservabilityGuard> {
        let logs = self.logs.unwrap_or_default();
        logs.install_panic_hook();

        let global_filter = logs.build_filter();
        let logs_layer = logs.into_layer();

        tracing_subscriber::registry()
            .with(global_filter)
            .with(logs_layer)
            .try_init()
            .context("failed installing global tracer / logger")?;

        Ok(ObservabilityGuard { _private: () })
    }

    /// Initializes the observability subsystem.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber is already installed.
    pub fn build(self) -> ObservabilityGuard {
        self.try_build().unwrap()
    }
}
