//! Configuration file support for knet-build.
//!
//! Two configuration file locations are read:
//! - Global: `~/.knet/build.toml` - User-wide defaults
//! - Project: `.knet/build.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, field by field.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Solution file handed to MSBuild when none is configured.
pub const DEFAULT_SOLUTION: &str = "knet.sln";

/// Directory holding the generated makefile when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// MSBuild `ToolsVersions` subkey queried when none is configured.
pub const DEFAULT_MSBUILD_TOOLS_VERSION: &str = "14.0";

/// knet-build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildSettings,

    /// Toolchain overrides
    pub toolchain: ToolchainSettings,
}

/// What to build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Solution file passed to MSBuild (default: knet.sln)
    pub solution: Option<String>,

    /// Directory containing the generated makefile (default: out)
    pub output_dir: Option<PathBuf>,

    /// Parallel jobs passed to make (None = detected core count)
    pub jobs: Option<usize>,
}

/// Where the backend tools live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Path to MSBuild.exe, bypassing the registry lookup
    pub msbuild: Option<PathBuf>,

    /// Program used instead of `make`
    pub make: Option<PathBuf>,

    /// `ToolsVersions` registry subkey (default: 14.0)
    pub msbuild_tools_version: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.solution.is_some() {
            self.build.solution = other.build.solution;
        }
        if other.build.output_dir.is_some() {
            self.build.output_dir = other.build.output_dir;
        }
        if other.build.jobs.is_some() {
            self.build.jobs = other.build.jobs;
        }

        if other.toolchain.msbuild.is_some() {
            self.toolchain.msbuild = other.toolchain.msbuild;
        }
        if other.toolchain.make.is_some() {
            self.toolchain.make = other.toolchain.make;
        }
        if other.toolchain.msbuild_tools_version.is_some() {
            self.toolchain.msbuild_tools_version = other.toolchain.msbuild_tools_version;
        }
    }

    /// Solution file, falling back to `knet.sln`.
    pub fn solution(&self) -> &str {
        self.build.solution.as_deref().unwrap_or(DEFAULT_SOLUTION)
    }

    /// Makefile directory, falling back to `out`.
    pub fn output_dir(&self) -> PathBuf {
        self.build
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Configured job count; zero counts as unset.
    pub fn jobs(&self) -> Option<usize> {
        self.build.jobs.filter(|&jobs| jobs > 0)
    }

    /// MSBuild tools version, falling back to `14.0`.
    pub fn msbuild_tools_version(&self) -> &str {
        self.toolchain
            .msbuild_tools_version
            .as_deref()
            .unwrap_or(DEFAULT_MSBUILD_TOOLS_VERSION)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.knet/build.toml)
/// 2. Global config (~/.knet/build.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("Loading global config {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        tracing::debug!("Loading project config {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global knet config directory (~/.knet).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".knet"))
}

/// Get the global config path (~/.knet/build.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("build.toml"))
}

/// Get the project config path (.knet/build.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".knet").join("build.toml")
}
