//! Tracing subscriber setup
//!
//! The filter comes from `ALOKASI_LOG` when set, otherwise from the
//! configured level. The TUI logs to a file so the alternate screen stays
//! clean.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AlokasiError, AlokasiResult};

/// Environment variable holding a full filter directive
pub const LOG_ENV: &str = "ALOKASI_LOG";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter for our crate at the given level
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(format!("alokasi={level}")))
}

/// Install the global subscriber
pub fn init(level: &str, target: LogTarget) -> AlokasiResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter_for(level));

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    AlokasiError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| AlokasiError::Config(format!("Failed to initialize logging: {}", e)))
}
