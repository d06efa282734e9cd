//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator.
//! Log output always goes to stderr (and optionally to daily rolling files) so
//! that record rows written to stdout stay machine readable.

use std::io;
use tracing::{info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Error returned when the global subscriber cannot be installed
pub type LoggingResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "campus-contact-sim".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// When file logging is enabled the returned guard flushes the file writer
    /// on drop and must be held for the life of the program.
    pub fn init(self) -> LoggingResult<Option<WorkerGuard>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        };

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, file_guard) = non_blocking(file_appender);
            guard = Some(file_guard);

            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(file_writer)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
        }

        if self.json_format {
            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
        } else {
            layers.push(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi)
                    .with_target(false)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
        }

        Registry::default().with(layers).with(env_filter).try_init()?;

        info!(level = %self.level, json = self.json_format, file = self.log_to_file, "Logging initialized");
        Ok(guard)
    }

    /// Initialize the default quiet logging (warnings and errors only)
    pub fn init_default() -> LoggingResult<Option<WorkerGuard>> {
        Self::new().init()
    }

    /// Initialize verbose logging (INFO level)
    pub fn init_verbose() -> LoggingResult<Option<WorkerGuard>> {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize debug logging (DEBUG level with span events)
    pub fn init_debug() -> LoggingResult<Option<WorkerGuard>> {
        Self::new().with_level(Level::DEBUG).with_span_events().init()
    }
}

/// Macro for creating structured log events with simulation context
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
            $($key = $value,)*
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
        );
    };
}
