//! Path management for Alokasi
//!
//! ## Path Resolution Order
//!
//! 1. `ALOKASI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/alokasi` on Linux, `%APPDATA%\alokasi\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AlokasiError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ALOKASI_DATA_DIR";

/// Manages all paths used by Alokasi
#[derive(Debug, Clone)]
pub struct AlokasiPaths {
    base_dir: PathBuf,
}

impl AlokasiPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AlokasiError> {
        Self::resolve(std::env::var(DATA_DIR_ENV).ok())
    }

    fn resolve(override_dir: Option<String>) -> Result<Self, AlokasiError> {
        let base_dir = match override_dir.filter(|d| !d.trim().is_empty()) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("com", "alokasi", "alokasi")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AlokasiError::Config("Could not determine config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("alokasi.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AlokasiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AlokasiError::Io(format!("Failed to create base directory: {}", e)))
    }
}
