//! Build task provider facade
//!
//! The object a host polls: `is_eligible` answers whether the workspace has
//! any Eclipse CDT projects, `settings` produces their build and clean tasks.
//! Settings are re-read on every call and no error ever reaches the host;
//! failures go to the [`Notifier`] instead.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{Config, DiscoveryMode, SettingsSource};
use crate::error::{ProviderError, Warning};
use crate::notify::Notifier;
use crate::project::{Assembler, Environment, FileSystem, Locator, TaskDescriptor};

/// Name shown by hosts that list their providers
pub const NICE_NAME: &str = "Build Eclipse C/C++ Project";

/// Discovery state of a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderState {
    /// Nothing discovered yet, or invalidated by a configuration change
    Uninitialized,
    /// Discovery ran and found no project files
    Ineligible { root: PathBuf, mode: DiscoveryMode },
    /// Discovery found project files
    Eligible {
        root: PathBuf,
        mode: DiscoveryMode,
        projects: Vec<PathBuf>,
    },
    /// Tasks were produced from the discovered project files
    SettingsProduced {
        root: PathBuf,
        mode: DiscoveryMode,
        projects: Vec<PathBuf>,
    },
}

impl ProviderState {
    /// Root, mode and project files of the last discovery, if any
    fn discovery(&self) -> Option<(&Path, DiscoveryMode, &[PathBuf])> {
        match self {
            ProviderState::Uninitialized => None,
            ProviderState::Ineligible { root, mode } => Some((root.as_path(), *mode, &[][..])),
            ProviderState::Eligible {
                root,
                mode,
                projects,
            }
            | ProviderState::SettingsProduced {
                root,
                mode,
                projects,
            } => Some((root.as_path(), *mode, projects.as_slice())),
        }
    }
}

type RefreshListener = Box<dyn Fn() + Send + Sync>;

/// Provider of build tasks for Eclipse CDT projects
pub struct CProjectProvider {
    cwd: PathBuf,
    settings: Arc<dyn SettingsSource>,
    fs: Arc<dyn FileSystem>,
    notifier: Arc<dyn Notifier>,
    root_override: Option<PathBuf>,
    state: ProviderState,
    listeners: Vec<RefreshListener>,
}

impl CProjectProvider {
    /// Create a provider for a working directory
    ///
    /// `cwd` is searched unless the settings name a project root.
    pub fn new(
        cwd: impl Into<PathBuf>,
        settings: Arc<dyn SettingsSource>,
        fs: Arc<dyn FileSystem>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            settings,
            fs,
            notifier,
            root_override: None,
            state: ProviderState::Uninitialized,
            listeners: Vec::new(),
        }
    }

    /// Search `root` regardless of the configured project root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_override = Some(root.into());
        self
    }

    pub fn nice_name(&self) -> &'static str {
        NICE_NAME
    }

    pub fn state(&self) -> &ProviderState {
        &self.state
    }

    /// Root searched by the last discovery
    pub fn root(&self) -> Option<&Path> {
        self.state.discovery().map(|(root, _, _)| root)
    }

    /// Project files found by the last discovery
    pub fn projects(&self) -> &[PathBuf] {
        self.state.discovery().map(|(_, _, p)| p).unwrap_or(&[])
    }

    /// Register a callback invoked when the host should refresh its tasks
    pub fn on_refresh(&mut self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether any project files exist under the project root
    pub fn is_eligible(&mut self) -> bool {
        let config = self.load_settings();
        self.discover(&config);
        matches!(self.state, ProviderState::Eligible { .. })
    }

    /// Build and clean tasks for every discovered project
    ///
    /// Runs discovery first when none has happened yet or when the
    /// configured root or discovery mode changed since the last one.
    pub fn settings(&mut self) -> Vec<TaskDescriptor> {
        let config = self.load_settings();
        let root = self.project_root(&config);

        let stale = match self.state.discovery() {
            Some((cached_root, cached_mode, _)) => {
                cached_root != root.as_path() || cached_mode != config.discovery
            }
            None => true,
        };
        if stale {
            self.discover(&config);
        }

        let (root, mode, projects) = match self.state.discovery() {
            Some((root, mode, projects)) => (root.to_path_buf(), mode, projects.to_vec()),
            None => return Vec::new(),
        };

        let env = Environment::from_entries(&config.environment_variables);
        let assembler = Assembler::new(self.fs.as_ref(), self.notifier.as_ref());
        let tasks: Vec<TaskDescriptor> = projects
            .iter()
            .flat_map(|path| assembler.assemble(path, &config.xpath, &env, config.project_buttons))
            .collect();

        tracing::info!(
            "Produced {} task(s) from {} project file(s)",
            tasks.len(),
            projects.len()
        );

        if !projects.is_empty() {
            self.state = ProviderState::SettingsProduced {
                root,
                mode,
                projects,
            };
        }
        tasks
    }

    /// Invalidate discovery after the host changed the configuration
    ///
    /// Drops the cached project list and notifies refresh listeners.
    pub fn configuration_changed(&mut self) {
        tracing::info!("Configuration changed, refreshing");
        self.state = ProviderState::Uninitialized;
        for listener in &self.listeners {
            listener();
        }
    }

    /// Directory searched for project files under `config`
    pub fn project_root(&self, config: &Config) -> PathBuf {
        match &self.root_override {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => self.cwd.join(root),
            None => config.project_root(&self.cwd),
        }
    }

    fn discover(&mut self, config: &Config) {
        let root = self.project_root(config);
        let locator = Locator::new(self.fs.as_ref(), self.notifier.as_ref());
        let mode = config.discovery;
        let projects = locator.locate(&root, mode);

        self.state = if projects.is_empty() {
            ProviderState::Ineligible { root, mode }
        } else {
            ProviderState::Eligible {
                root,
                mode,
                projects,
            }
        };
    }

    fn load_settings(&self) -> Config {
        match self.settings.load() {
            Ok(config) => config,
            Err(e) => {
                let err = ProviderError::Config(format!("{:#}", e));
                self.notifier.warn(Warning::from(&err));
                Config::default()
            }
        }
    }
}
