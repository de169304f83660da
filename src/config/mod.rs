//! Configuration module for cprojecthub
//!
//! Provides XDG-compliant layered configuration loading and the
//! [`SettingsSource`] seam the provider reads its settings through.

pub mod loader;
pub mod model;
pub mod settings;

pub use loader::{config_paths, find_config_files, load_config};
pub use model::*;
pub use settings::{FileSettings, SettingsSource};
