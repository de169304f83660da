//! Settings sources read by the provider
//!
//! The provider re-reads its settings on every call, so a source must hand
//! back the current values each time instead of a snapshot taken at startup.

use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::Result;

use super::loader::load_config;
use super::model::Config;

/// Source of the current configuration
pub trait SettingsSource: Send + Sync {
    /// Load the configuration as it is right now
    fn load(&self) -> Result<Config>;
}

/// Settings backed by the layered config files and environment
#[derive(Debug, Clone, Default)]
pub struct FileSettings {
    override_path: Option<PathBuf>,
}

impl FileSettings {
    pub fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }
}

impl SettingsSource for FileSettings {
    fn load(&self) -> Result<Config> {
        load_config(self.override_path.as_deref())
    }
}

impl SettingsSource for Config {
    fn load(&self) -> Result<Config> {
        Ok(self.clone())
    }
}

/// Settings that can be changed at runtime, e.g. by an embedding host
impl SettingsSource for RwLock<Config> {
    fn load(&self) -> Result<Config> {
        match self.read() {
            Ok(guard) => Ok(guard.clone()),
            Err(_) => anyhow::bail!("settings lock poisoned"),
        }
    }
}
