//! Logging setup: human-readable events on stderr plus a JSONL log file.
//!
//! The log file location is resolved in this order:
//!
//! 1. `TACTFUL_LOG_PATH` (exact file path)
//! 2. `TACTFUL_LOG_DIR` (directory, daily-rotated `tactful.jsonl`)
//! 3. `log_dir` from configuration
//! 4. The platform data directory (e.g. `~/.local/share/tactful/logs`)
//!
//! If no location can be determined or created, only stderr logging is set up.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "TACTFUL_LOG_PATH";
const LOG_DIR_ENV: &str = "TACTFUL_LOG_DIR";
const LOG_FILE_NAME: &str = "tactful.jsonl";

/// Where (if anywhere) to write the JSONL log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: Option<PathBuf>,
    /// File name (or prefix, when rotating) inside `log_dir`.
    pub file_name: String,
    /// Rotate daily. Explicit `TACTFUL_LOG_PATH` files are never rotated.
    pub rotate: bool,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment, then `config_log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty())
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name: name.to_string(),
                rotate: false,
            };
        }

        let log_dir = env_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or(config_dir)
            .or_else(default_log_dir);

        Self {
            log_dir,
            file_name: LOG_FILE_NAME.to_string(),
            rotate: true,
        }
    }
}

/// `logs/` under the platform's local data directory.
fn default_log_dir() -> Option<PathBuf> {
    tactful_core::config::user_data_local_dir().map(|dir| dir.into_std_path_buf().join("logs"))
}

/// Build the event filter. `RUST_LOG` wins; otherwise `-q`/`-v` adjust the
/// configured default level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .boxed();

    let (file_layer, guard) = match config.log_dir.as_deref().and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        Some(dir)
    }) {
        Some(dir) => {
            let appender = if config.rotate {
                tracing_appender::rolling::daily(dir, &config.file_name)
            } else {
                tracing_appender::rolling::never(dir, &config.file_name)
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/logs/custom.jsonl")),
            Some(PathBuf::from("/ignored")),
            Some(PathBuf::from("/ignored/too")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(cfg.file_name, "custom.jsonl");
        assert!(!cfg.rotate);
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("out.jsonl")), None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
        assert_eq!(cfg.file_name, "out.jsonl");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/from/env")),
            Some(PathBuf::from("/from/config")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/from/env")));
        assert_eq!(cfg.file_name, LOG_FILE_NAME);
        assert!(cfg.rotate);
    }

    #[test]
    fn falls_back_to_data_dir_logs() {
        let cfg = ObservabilityConfig::resolve(None, None, None);
        assert_eq!(cfg.log_dir, default_log_dir());
        if let Some(dir) = cfg.log_dir {
            assert!(dir.ends_with("logs"));
            let data = tactful_core::config::user_data_local_dir().unwrap();
            assert!(dir.starts_with(data.as_std_path()));
        }
    }

    #[test]
    fn config_dir_used_when_env_empty() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/from/config")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/from/config")));
    }
}
