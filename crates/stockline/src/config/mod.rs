//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local one taking precedence:
//! 1. User-level: `~/.stockline/config.toml`
//! 2. Local: `<cwd>/.stockline/config.toml`
//!
//! Supports keymap customization, a profile location override, and the
//! default log filter. Uses TOML format with serde.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_REFRESH: &str = "ctrl+r";
const DEFAULT_QUIT: &str = "q";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub keymap: KeymapConfig,
    pub profile: ProfileConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub refresh: String,
    pub quit: String,
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    keymap: Option<RawKeymap>,
    profile: Option<RawProfile>,
    log: Option<RawLog>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    #[serde(alias = "refreshQuotes")]
    refresh: Option<String>,
    quit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLog {
    #[serde(alias = "level")]
    filter: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
            None
        }
    }
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let refresh = local_keymap
        .and_then(|k| k.refresh.clone())
        .or_else(|| user_keymap.and_then(|k| k.refresh.clone()))
        .unwrap_or_else(|| DEFAULT_REFRESH.to_string());
    let quit = local_keymap
        .and_then(|k| k.quit.clone())
        .or_else(|| user_keymap.and_then(|k| k.quit.clone()))
        .unwrap_or_else(|| DEFAULT_QUIT.to_string());

    let local_profile = local.as_ref().and_then(|c| c.profile.as_ref());
    let user_profile = user.as_ref().and_then(|c| c.profile.as_ref());
    let profile_path = local_profile
        .and_then(|p| p.path.clone())
        .or_else(|| user_profile.and_then(|p| p.path.clone()))
        .map(PathBuf::from);

    let local_log = local.as_ref().and_then(|c| c.log.as_ref());
    let user_log = user.as_ref().and_then(|c| c.log.as_ref());
    let filter = local_log
        .and_then(|l| l.filter.clone())
        .or_else(|| user_log.and_then(|l| l.filter.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Config {
        keymap: KeymapConfig { refresh, quit },
        profile: ProfileConfig { path: profile_path },
        log: LogConfig { filter },
    }
}

fn config_path_from_root(root: &Path) -> PathBuf {
    root.join(".stockline").join("config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_path_from_root(&home))
}

pub fn load_config(root: &Path) -> Config {
    let local_path = config_path_from_root(root);
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, local_config)
}

#[cfg(test)]
mod tests;
