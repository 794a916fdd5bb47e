use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG`, falling back to `default_level`.
/// Set `CLOUDEXPORT_LOG` env var to a file path to log to a file instead
/// of stderr. If the file cannot be created, logs still go to stderr.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match std::env::var("CLOUDEXPORT_LOG").ok().and_then(open_log_file) {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            registry.with(file_layer).init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            registry.with(stderr_layer).init();
        }
    }
}

fn open_log_file(log_path: String) -> Option<File> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
            None
        }
    }
}
