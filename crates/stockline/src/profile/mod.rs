//! Persistent ticker profile.
//!
//! Stores the list of tracked tickers in:
//! `~/.config/stockline/profile.toml`
//!
//! The location can be overridden with `STOCKLINE_PROFILE_PATH` or the
//! `[profile] path` config key. The line editor only sees the profile
//! through the `TickerProfile` trait.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::quotes::QuoteSnapshot;

const PROFILE_PATH_ENV: &str = "STOCKLINE_PROFILE_PATH";
const DEFAULT_TICKERS: [&str; 7] = ["AAPL", "C", "GOOG", "IBM", "KO", "ORCL", "V"];

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("profile is not valid TOML: {0}")]
    Decode(#[from] toml::de::Error),
}

/// What the line editor needs from a profile on commit.
pub trait TickerProfile {
    fn tickers(&self) -> &[String];
    fn tickers_mut(&mut self) -> &mut Vec<String>;
    fn save(&self) -> Result<(), ProfileError>;
    fn quotes(&self) -> QuoteSnapshot;
}

#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub tickers: Vec<String>,
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    #[serde(alias = "Tickers")]
    tickers: Option<Vec<String>>,
}

impl Profile {
    pub fn with_defaults(path: Option<PathBuf>) -> Self {
        Self {
            tickers: DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
            path,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl TickerProfile for Profile {
    fn tickers(&self) -> &[String] {
        &self.tickers
    }

    fn tickers_mut(&mut self) -> &mut Vec<String> {
        &mut self.tickers
    }

    fn save(&self) -> Result<(), ProfileError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let encoded = toml::Value::Array(
            self.tickers
                .iter()
                .map(|ticker| toml::Value::String(ticker.clone()))
                .collect(),
        );
        fs::write(path, format!("tickers = {encoded}\n"))?;
        Ok(())
    }

    fn quotes(&self) -> QuoteSnapshot {
        QuoteSnapshot::from_tickers(&self.tickers)
    }
}

/// Resolve where the profile lives. The environment wins over config.
pub fn profile_path(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(value) = std::env::var_os(PROFILE_PATH_ENV) {
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("stockline").join("profile.toml"))
}

fn read_profile(path: &Path) -> Result<Option<Vec<String>>, ProfileError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    if contents.trim().is_empty() {
        return Ok(None);
    }
    let raw: RawProfile = toml::from_str(&contents)?;
    Ok(raw.tickers)
}

fn normalize_tickers(raw: Vec<String>) -> Vec<String> {
    let mut tickers: Vec<String> = raw
        .into_iter()
        .map(|ticker| ticker.trim().to_uppercase())
        .filter(|ticker| !ticker.is_empty())
        .collect();
    tickers.sort();
    tickers.dedup();
    tickers
}

/// Load the profile at `path`, falling back to the default ticker list
/// when the file is missing, empty, or unreadable.
pub fn load_profile(path: Option<PathBuf>) -> Profile {
    let Some(location) = path.as_deref() else {
        return Profile::with_defaults(None);
    };
    match read_profile(location) {
        Ok(Some(tickers)) => Profile {
            tickers: normalize_tickers(tickers),
            path,
        },
        Ok(None) => Profile::with_defaults(path),
        Err(err) => {
            tracing::warn!(path = %location.display(), error = %err, "falling back to default profile");
            Profile::with_defaults(path)
        }
    }
}
