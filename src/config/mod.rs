//! Configuration module for Alokasi
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AlokasiPaths;
pub use settings::Settings;
