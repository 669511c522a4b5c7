//! Settings for the treeselect binary
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREESELECT_*)
//! 3. Project config (./treeselect.toml)
//! 4. User config (<config dir>/treeselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{DisplaySettings, SelectSettings, Settings, UnicodeMode};
