use std::path::{Path, PathBuf};

use anyhow::Context;
use keyshift_core::EnvContract;
use serde::{Deserialize, Serialize};

/// Project config file name, looked up from the current directory upwards
pub const PROJECT_FILE: &str = "keyshift.toml";

// ============================================================================
// Config (keyshift.toml)
// ============================================================================

/// Files to rewrite and the environment they will depend on afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target files, relative to the directory holding the config
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    #[serde(default)]
    pub env: EnvContract,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            env: EnvContract::default(),
        }
    }
}

fn default_targets() -> Vec<String> {
    vec![
        "src/routes/api/taste-profile/analyze/+server.ts".to_string(),
        "src/routes/api/listen-along/sync/+server.ts".to_string(),
        "src/routes/playlists/[id]/+page.server.ts".to_string(),
        "src/routes/playlists/+page.server.ts".to_string(),
    ]
}

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    Global(PathBuf),
    Defaults,
}

/// A config together with the directory its relative targets resolve against
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub root: PathBuf,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Configured targets as paths, in listed order
    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.config
            .targets
            .iter()
            .map(|target| self.root.join(target))
            .collect()
    }
}

impl Config {
    /// Resolve config for the current directory.
    ///
    /// Order: `explicit` path, `keyshift.toml` in the current or a parent
    /// directory, the global config file, built-in defaults. Never writes.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<LoadedConfig> {
        let cwd = std::env::current_dir()?;
        Self::load_from(explicit, &cwd, Self::global_config_path())
    }

    pub fn load_from(
        explicit: Option<&Path>,
        cwd: &Path,
        global: Option<PathBuf>,
    ) -> anyhow::Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = Self::read(path)?;
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
            return Ok(LoadedConfig {
                config,
                root,
                source: ConfigSource::Explicit(path.to_path_buf()),
            });
        }

        if let Some(root) = Self::find_project_root_from(cwd) {
            let path = root.join(PROJECT_FILE);
            let config = Self::read(&path)?;
            return Ok(LoadedConfig {
                config,
                root,
                source: ConfigSource::Project(path),
            });
        }

        if let Some(path) = global.filter(|p| p.exists()) {
            let config = Self::read(&path)?;
            return Ok(LoadedConfig {
                config,
                root: cwd.to_path_buf(),
                source: ConfigSource::Global(path),
            });
        }

        tracing::debug!("No config file found, using defaults");
        Ok(LoadedConfig {
            config: Config::default(),
            root: cwd.to_path_buf(),
            source: ConfigSource::Defaults,
        })
    }

    /// Parse a config file
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Write `keyshift.toml` into `dir`, returning its path
    pub fn save(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(PROJECT_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "keyshift", "keyshift")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Find the directory holding `keyshift.toml`, walking up from `start`
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
