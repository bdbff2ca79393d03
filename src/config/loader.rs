use std::fs;
use std::path::{Path, PathBuf};

use super::core::RoiConfig;
use crate::errors::RoiError;

pub const CONFIG_FILE_NAME: &str = ".email-roi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML configuration string.
pub fn parse_config(contents: &str) -> Result<RoiConfig, RoiError> {
    toml::from_str::<RoiConfig>(contents)
        .map_err(|e| RoiError::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load an explicitly requested config file; any failure is an error.
pub fn load_config_from(path: &Path) -> Result<RoiConfig, RoiError> {
    let contents = crate::io::read_file(path)?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate path during discovery.
///
/// A missing file is silent; unreadable or invalid files warn and are
/// skipped so the calculator still runs on defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoiConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`.
pub fn discover_config(start: PathBuf) -> RoiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiConfig::default()
        })
}

/// Discover configuration from the current working directory.
pub fn load_config() -> RoiConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiConfig::default()
        }
    }
}
