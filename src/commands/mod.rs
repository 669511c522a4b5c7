//! Subcommand implementations for the treeselect binary

pub mod pick;
pub mod show;

use std::path::Path;

use treeselect::config::{ConfigWarning, Settings};
use treeselect::ItemId;

/// Load settings for the current directory and report unknown keys
pub fn load_settings() -> Settings {
    let cwd = std::env::current_dir().ok();
    let (settings, warnings) = Settings::load_or_default(cwd.as_deref());
    print_config_warnings(&warnings);
    settings
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let path: &Path = &w.file;
        if let Some(line) = w.line {
            eprintln!("warning: unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("warning: unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Ids from a comma separated flag, blanks dropped
pub fn to_ids(raw: Vec<String>) -> Vec<ItemId> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(ItemId::from)
        .collect()
}
