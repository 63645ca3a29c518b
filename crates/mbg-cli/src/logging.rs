use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "MBG_LOG";
const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("io error opening log file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("logging already initialized: {0}")]
    Init(String),
}

/// Pick the filter directive: `--verbose`, then `MBG_LOG`, then the
/// configured level, then `warn`.
pub fn filter_directive(verbose: bool, env: Option<String>, configured: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install the global subscriber: JSON lines appended to `log_file` when
/// given, human-readable output on stderr otherwise.
pub fn init_logging(
    verbose: bool,
    configured: Option<&str>,
    log_file: Option<&Path>,
) -> Result<(), LoggingError> {
    let directive = filter_directive(verbose, std::env::var(LOG_ENV).ok(), configured);
    let filter =
        EnvFilter::try_new(&directive).map_err(|err| LoggingError::Filter(err.to_string()))?;

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(Mutex::new(file));
            let make_writer = BoxMakeWriter::new(move || SharedWriter {
                file: Arc::clone(&file),
            });
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(make_writer)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|err| LoggingError::Init(err.to_string()))
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|err| LoggingError::Init(err.to_string()))
        }
    }
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_everything() {
        assert_eq!(
            filter_directive(true, Some("error".to_string()), Some("info")),
            "debug"
        );
    }

    #[test]
    fn env_then_config_then_default() {
        assert_eq!(
            filter_directive(false, Some("mbg_generate=trace".to_string()), Some("info")),
            "mbg_generate=trace"
        );
        assert_eq!(filter_directive(false, Some(" ".to_string()), Some("info")), "info");
        assert_eq!(filter_directive(false, None, None), "warn");
    }
}
