use crate::config::LoggingConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output and, when enabled, a
/// daily rolling JSON log file.
///
/// The returned guard flushes the file writer on drop; keep it alive for as
/// long as the process runs.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise info for everything
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("risk_catalog=info,info"));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    let (file_layer, guard) = if config.file_output {
        match fs::create_dir_all(&config.dir) {
            Ok(()) => {
                let file_appender =
                    tracing_appender::rolling::daily(&config.dir, &config.file_prefix);
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer().json().with_writer(non_blocking_writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory '{}': {}",
                    config.dir.display(),
                    e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    // try_init so a second call (e.g. from tests) is a no-op rather than a panic
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
