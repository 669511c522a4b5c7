//! Settings type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TreeSelectResult;
use crate::models::GroupsBehavior;

use super::loader::{self, ConfigWarning};

/// Selection behavior of the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectSettings {
    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub groups_behavior: GroupsBehavior,
}

/// Icon set selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    /// Detect from the terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl UnicodeMode {
    /// Resolve against the detected terminal support
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            UnicodeMode::Auto => detected,
            UnicodeMode::Always => true,
            UnicodeMode::Never => false,
        }
    }
}

/// Terminal rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub unicode: UnicodeMode,

    /// Rows shown at once
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unicode: UnicodeMode::default(),
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    15
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub select: SelectSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> TreeSelectResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TREESELECT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
