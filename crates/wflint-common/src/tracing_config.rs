//! Log output for hosts embedding the linter.
//!
//! The type crates only emit `tracing` events; nothing is printed unless a
//! host installs a subscriber. [`TracingConfig`] builds one for any writer,
//! and [`init_tracing`] installs it on stderr from the environment:
//!
//! ```bash
//! # Every widening to `any` while linting a workflow
//! WFLINT_LOG=wflint_types=trace wflint .github/workflows/ci.yml
//!
//! # Indented tree, or one JSON object per event
//! WFLINT_LOG=debug WFLINT_LOG_FORMAT=tree wflint .github/workflows/ci.yml
//! WFLINT_LOG=debug WFLINT_LOG_FORMAT=json wflint .github/workflows/ci.yml
//! ```

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "WFLINT_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "WFLINT_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One plain line per event.
    #[default]
    Text,
    /// Events indented under their spans.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to [`LogFormat::Text`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter and format for one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `wflint_types=trace`. Invalid directives
    /// are skipped.
    pub filter: String,
    pub format: LogFormat,
}

impl TracingConfig {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            format: LogFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Read `WFLINT_LOG` and `WFLINT_LOG_FORMAT`. `None` when logging is off.
    pub fn from_env() -> Option<Self> {
        let filter = std::env::var(LOG_ENV).ok()?;
        let format = std::env::var(LOG_FORMAT_ENV).unwrap_or_default();
        Some(Self::new(filter).with_format(LogFormat::parse(&format)))
    }

    /// Build a subscriber writing to `writer`.
    ///
    /// Text output carries no ANSI colors, so it stays greppable in CI logs.
    pub fn subscriber<W>(&self, writer: W) -> Box<dyn Subscriber + Send + Sync>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter = EnvFilter::builder().parse_lossy(&self.filter);
        let registry = Registry::default().with(filter);
        match self.format {
            LogFormat::Text => {
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                Box::new(registry.with(layer))
            }
            LogFormat::Tree => {
                let layer = HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true)
                    .with_writer(writer);
                Box::new(registry.with(layer))
            }
            LogFormat::Json => {
                let layer = fmt::layer().json().with_writer(writer);
                Box::new(registry.with(layer))
            }
        }
    }

    /// Install as the process-wide subscriber, writing to stderr.
    ///
    /// Returns `false` when another subscriber is already installed; that one
    /// is kept.
    pub fn install(&self) -> bool {
        let subscriber = self.subscriber(std::io::stderr);
        tracing::subscriber::set_global_default(subscriber).is_ok()
    }
}

/// Install a stderr subscriber configured by `WFLINT_LOG`/`WFLINT_LOG_FORMAT`.
///
/// Returns whether a subscriber was installed by this call.
pub fn init_tracing() -> bool {
    match TracingConfig::from_env() {
        Some(config) => config.install(),
        None => false,
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
