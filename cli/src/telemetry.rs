//! Tracing subscriber setup

use anyhow::{Context, Result};
use quiz_infrastructure::{FileLoggingConfig, LogMode};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber.
///
/// `-v` wins over the configured mode; `RUST_LOG` wins over both. The
/// returned guard must live until exit so the log file is flushed.
pub fn init(verbosity: Option<&str>, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = verbosity.unwrap_or(logging.default_level());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(match logging.mode {
        LogMode::Development => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed(),
        LogMode::Production => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .boxed(),
    });

    let guard = match &logging.file {
        Some(file) => {
            let (writer, guard) = file_writer(Path::new(file))?;
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    Ok(tracing_appender::non_blocking(appender))
}
