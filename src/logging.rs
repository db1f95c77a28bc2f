use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "PHOTO_SEARCH_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns stdout, so logging is disabled unless `PHOTO_SEARCH_LOG`
/// names a file path. The filter comes from `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let Some(log_path) = log_file_path(|name| std::env::var(name).ok()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_path, err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Per-process log file derived from `PHOTO_SEARCH_LOG`, or `None` when unset.
///
/// A `.{timestamp}.{pid}` suffix keeps concurrent instances apart.
fn log_file_path<F>(env_lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let base = env_lookup(LOG_ENV).filter(|path| !path.is_empty())?;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    Some(format!("{}.{}.{}", base, timestamp, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_empty_env_disables_logging() {
        assert_eq!(log_file_path(|_| None), None);
        assert_eq!(log_file_path(|_| Some(String::new())), None);
    }

    #[test]
    fn path_gets_timestamp_and_pid_suffix() {
        let path = log_file_path(|name| {
            (name == LOG_ENV).then(|| "/tmp/photo-search.log".to_string())
        })
        .unwrap();
        assert!(path.starts_with("/tmp/photo-search.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
