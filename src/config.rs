//! Application configuration.
//!
//! The configuration is loaded from a JSON file,
//! `$XDG_CONFIG_HOME/workspacer/config.json`.  Every key is optional; a
//! missing file means "use the defaults".
//!
//! # Example
//!
//! ```json
//! {
//!   "managed": { "min": 1, "max": 10 },
//!   "socket_path": "/run/user/1000/sway-ipc.1000.1234.sock"
//! }
//! ```

use crate::command::{Command, RangeArgs};
use crate::directory::ManagedRange;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numbered workspaces that are always navigable.  `None` disables
    /// placeholders unless the command line asks for a range.
    pub managed: Option<ManagedRange>,

    /// IPC socket of the window manager.  When unset it is taken from
    /// `$I3SOCK` or `$SWAYSOCK`.
    pub socket_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Managed names to augment the sequence with.
    ///
    /// Command-line bounds win over the configured range, which wins over
    /// the command's own default.  A half-specified command-line range is
    /// rejected.
    pub fn managed_names(
        &self,
        cli: &RangeArgs,
        command: &Command,
    ) -> Result<Vec<String>, ConfigError> {
        let range = cli
            .resolve()?
            .or(self.managed)
            .or_else(|| command.default_range());
        Ok(range.map(|r| r.names()).unwrap_or_default())
    }
}

/// `$XDG_CONFIG_HOME/workspacer`, falling back to `$HOME/.config/workspacer`.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("workspacer")
}

/// Errors from loading configuration or resolving the managed range.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: failed to read {0}")]
    Read(String),
    #[error("config error: failed to parse {0}")]
    Parse(String),
    /// Only one of the two range bounds was given; names the missing one.
    #[error("config error: managed range is missing its {0} bound")]
    PartialRange(&'static str),
}
