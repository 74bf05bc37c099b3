//! config.rs
//!
//! Credential resolution. The environment variable wins and is never
//! written back; otherwise the key lives in a small JSON config under
//! the user config dir.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agency-terminal/config.json")
}

pub fn load() -> Option<Config> {
    fs::read_to_string(config_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
}

pub fn save(cfg: &Config) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let body = serde_json::to_string_pretty(cfg)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(path, body)
}

/// The key the next remote call will use, if any.
pub fn resolve_key() -> Option<String> {
    if let Ok(key) = std::env::var(KEY_ENV) {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }

    load()
        .map(|cfg| cfg.api_key)
        .filter(|k| !k.trim().is_empty())
}
