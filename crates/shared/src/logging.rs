//! Logging infrastructure for the manga-web front end.
//!
//! Structured logging to the console and, optionally, to daily-rotated files.
//! `RUST_LOG` overrides the configured filter.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory path
    pub log_dir: String,
    /// Component name (used for log file naming)
    pub component: String,
    /// Default log level
    pub default_level: Level,
    /// Enable console output
    pub console: bool,
    /// Enable file output
    pub file: bool,
    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            component: "manga-web".to_string(),
            default_level: Level::INFO,
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Build a logging setup for `component` from the `[logging]` config section
    pub fn from_settings(component: &str, settings: &LoggingConfig) -> Result<Self> {
        Ok(Self {
            log_dir: settings.log_dir.clone(),
            component: component.to_string(),
            default_level: parse_level(&settings.default_level)?,
            console: settings.console,
            file: settings.file,
            json_format: settings.json_format,
        })
    }

    /// Filter directives used when `RUST_LOG` is not set
    fn default_directives(&self) -> String {
        // Targets use the crate name, so dashes become underscores.
        let level = self.default_level;
        format!(
            "{}={level},shared={level},manga_web={level},tower_http={level},hyper=warn,reqwest=warn,h2=warn",
            self.component.replace('-', "_"),
        )
    }
}

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(name: &str) -> Result<Level> {
    Level::from_str(name.trim()).map_err(|_| anyhow!("Invalid log level: {}", name))
}

/// Initialize logging with the given configuration
///
/// Sets up tracing with:
/// - Human-readable console output
/// - Optional daily-rotated file output, plain or JSON
/// - A default filter that `RUST_LOG` can override
pub fn init(config: LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let mut layers = Vec::new();

    if config.console {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stdout)
            .boxed();
        layers.push(console_layer);
    }

    if config.file {
        let log_dir = Path::new(&config.log_dir);
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", config.log_dir))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, &config.component);

        let file_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_target(true)
                .with_level(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(file_appender)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(file_appender)
                .boxed()
        };

        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        component = %config.component,
        file = config.file,
        log_dir = %config.log_dir,
        "Logging initialized"
    );

    Ok(())
}
