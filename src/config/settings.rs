//! User settings for Alokasi
//!
//! Preferences only; ledger contents are never written to disk.

use serde::{Deserialize, Serialize};

use super::paths::AlokasiPaths;
use crate::error::AlokasiError;
use crate::models::{Money, MoneyFormat};

/// User settings for Alokasi
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget filled in when the form opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_budget: Option<Money>,

    /// Decimals shown for amounts (0 to 2)
    #[serde(default)]
    pub display_precision: u32,

    /// Log filter level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_budget: None,
            display_precision: 0,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Format used when rendering amounts
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat::with_precision(self.display_precision)
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AlokasiPaths) -> Result<Self, AlokasiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AlokasiError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AlokasiError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AlokasiPaths) -> Result<(), AlokasiError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AlokasiError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AlokasiError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
