//! # Configuration
//!
//! Construction behavior is tuned by [`StyleConfig`], loaded through
//! [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TRACEATTRS_SKIP_INVALID`, `TRACEATTRS_WARN_UNKNOWN`.
//! 2. **Project Config**: a `traceattrs.toml` passed to [`StyleConfig::load`].
//!    [`StyleConfig::load_from`] takes both files explicitly and skips the
//!    environment.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped. Files must carry a `.toml` extension.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `skip_invalid` | `false` | Drop invalid seed values during construction instead of failing |
//! | `warn_unknown` | `false` | Log forwarded unknown attributes at `warn` instead of `debug` |
//!
//! `skip_invalid` only affects construction. `set_attr` always fails fast.

use crate::error::Result;
use confique::{Builder, Config};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "traceattrs.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Drop invalid values while constructing a container, logging each one,
    /// instead of failing the whole construction.
    #[config(default = false, env = "TRACEATTRS_SKIP_INVALID")]
    pub skip_invalid: bool,

    /// Log forwarded unknown attributes at `warn` level.
    #[config(default = false, env = "TRACEATTRS_WARN_UNKNOWN")]
    pub warn_unknown: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            warn_unknown: false,
        }
    }
}

impl StyleConfig {
    /// Load from the environment, an optional project file and the global file.
    pub fn load(project_file: Option<&Path>) -> Result<Self> {
        let global = global_config_path();
        Self::layered(Self::builder().env(), project_file, global.as_deref())
    }

    /// Load from the given files only, project file first. The environment
    /// and the user's global config are not consulted.
    pub fn load_from(project_file: Option<&Path>, global_file: Option<&Path>) -> Result<Self> {
        Self::layered(Self::builder(), project_file, global_file)
    }

    fn layered(
        mut builder: Builder<Self>,
        project_file: Option<&Path>,
        global_file: Option<&Path>,
    ) -> Result<Self> {
        for path in [project_file, global_file].into_iter().flatten() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// A lenient configuration that skips invalid seed values.
    pub fn lenient() -> Self {
        Self {
            skip_invalid: true,
            ..Self::default()
        }
    }
}

/// Location of the user-wide config file, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "traceattrs").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
