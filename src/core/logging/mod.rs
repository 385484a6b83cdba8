//! Tracing subscriber setup for hosts embedding the translator

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "pdquery.log";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Daily rolling log files are written here when set; stdout otherwise.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Reads `PDQUERY_LOG_LEVEL` and `PDQUERY_LOG_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            level: env::var("PDQUERY_LOG_LEVEL").unwrap_or(defaults.level),
            log_dir: env::var("PDQUERY_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Installs the global subscriber. Returns the file writer guard, which must
/// be kept alive for buffered lines to be flushed. A second call is a no-op.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let _ = fmt()
                .with_env_filter(config.filter())
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();

            Ok(Some(guard))
        }
        None => {
            let _ = fmt()
                .with_env_filter(config.filter())
                .with_target(true)
                .with_level(true)
                .try_init();

            Ok(None)
        }
    }
}
