//! Logging initialization
//!
//! Events go to stdout; when a log directory is configured, a daily-rolling
//! `pollbook.log` is written as well so an election day leaves an auditable
//! trail on disk. `RUST_LOG` overrides the default `info` filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_FILE_NAME: &str = "pollbook.log";

/// Initialize the global subscriber.
///
/// The returned guard must stay alive for the lifetime of the process;
/// dropping it flushes and stops the file writer.
pub fn init_logging(logs_path: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stdout_layer = fmt::layer().with_target(true);

    match logs_path {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();

            Registry::default()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            Registry::default()
                .with(env_filter)
                .with(stdout_layer)
                .try_init()?;

            Ok(None)
        }
    }
}
