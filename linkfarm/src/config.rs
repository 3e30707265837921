//! Where the CLI gets its [`BridgeConfig`] from.
//!
//! 1. `config.json` in the platform config dir (`~/.config/linkfarm/` on Linux).
//! 2. `LINKFARM_TMPDIR` overrides the temp root.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use linkfarm_core::BridgeConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const TMPDIR_ENV: &str = "LINKFARM_TMPDIR";
pub const CONFIG_FILE: &str = "config.json";

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "linkfarm").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load the effective configuration for this process.
pub fn load() -> Result<BridgeConfig> {
    let mut config = match config_path() {
        Some(path) if path.is_file() => load_from(&path)?,
        _ => BridgeConfig::default(),
    };
    apply_tmpdir_override(&mut config, std::env::var_os(TMPDIR_ENV));
    config.validate()?;
    Ok(config)
}

pub fn load_from(path: &Path) -> Result<BridgeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = BridgeConfig::from_json_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// An empty value is ignored.
pub fn apply_tmpdir_override(config: &mut BridgeConfig, value: Option<OsString>) {
    if let Some(dir) = value.filter(|v| !v.is_empty()) {
        config.temp_root = Some(PathBuf::from(dir));
    }
}
