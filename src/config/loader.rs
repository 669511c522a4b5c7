//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TreeSelectError, TreeSelectResult};
use crate::models::GroupsBehavior;

use super::types::{Settings, UnicodeMode};

/// File name of the project-level settings
pub const PROJECT_CONFIG_FILE: &str = "treeselect.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeSelectError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A file that fails to parse is skipped with a log line so the picker
/// still starts.
pub fn load_or_default(project_root: Option<&Path>) -> (Settings, Vec<ConfigWarning>) {
    let user_config = dirs::config_dir().map(|dir| dir.join("treeselect/config.toml"));
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));

    for candidate in [project_config, user_config].into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((settings, warnings)) => {
                tracing::debug!(path = %candidate.display(), "loaded settings");
                return (with_env_overrides(settings, |key| std::env::var(key).ok()), warnings);
            }
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "ignoring unreadable settings");
            }
        }
    }

    (
        with_env_overrides(Settings::default(), |key| std::env::var(key).ok()),
        Vec::new(),
    )
}

/// Apply environment variable overrides (TREESELECT_* prefix)
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    // TREESELECT_MULTIPLE
    if let Some(val) = get_env("TREESELECT_MULTIPLE") {
        settings.select.multiple = parse_flag(&val);
    }

    // TREESELECT_GROUPS_BEHAVIOR
    if let Some(val) = get_env("TREESELECT_GROUPS_BEHAVIOR") {
        match val.parse::<GroupsBehavior>() {
            Ok(behavior) => settings.select.groups_behavior = behavior,
            Err(message) => tracing::warn!(%message, "ignoring TREESELECT_GROUPS_BEHAVIOR"),
        }
    }

    // TREESELECT_UNICODE
    if let Some(val) = get_env("TREESELECT_UNICODE") {
        settings.display.unicode = match val.to_lowercase().as_str() {
            "always" | "true" | "1" => UnicodeMode::Always,
            "never" | "false" | "0" => UnicodeMode::Never,
            _ => UnicodeMode::Auto,
        };
    }

    // TREESELECT_PAGE_SIZE
    if let Some(val) = get_env("TREESELECT_PAGE_SIZE") {
        match val.trim().parse::<usize>() {
            Ok(size) if size > 0 => settings.display.page_size = size,
            _ => tracing::warn!(value = %val, "ignoring TREESELECT_PAGE_SIZE"),
        }
    }

    settings
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && !val.is_empty()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "select",
        "multiple",
        "groups_behavior",
        "display",
        "unicode",
        "page_size",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
