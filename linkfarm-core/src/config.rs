//! Bridge configuration.
//!
//! Every knob the bridge honours lives here so the host can load it from
//! disk (JSON) or build it in code. Missing fields fall back to defaults.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::BridgeError;
use crate::reader::ReadLimits;

/// 512 KiB per read.
pub const DEFAULT_CHUNK_SIZE: usize = 512 * 1024;
/// 512 chunks of 512 KiB: roughly 256 MiB of path data.
pub const DEFAULT_MAX_CHUNKS: usize = 512;
pub const DEFAULT_PROGRAM_TAG: &str = "linkfarm";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Bytes requested per read call.
    pub chunk_size: usize,
    /// Ceiling in chunks. Input past `chunk_size * max_chunks` bytes is dropped.
    pub max_chunks: usize,
    /// Prefix of the link directory name (`<tag>.XXXXXX`).
    pub program_tag: String,
    /// Parent of the link directory. `None` means the system temp dir.
    pub temp_root: Option<PathBuf>,
    /// Refresh the listing right after entering the link directory.
    pub refresh_on_enter: bool,
    /// Seed for the session's "restore last path on exit" flag.
    /// The bridge always clears it once invoked.
    pub restore_last_path: bool,
    /// Give up on the input stream after this many seconds. `None` blocks forever.
    pub read_timeout_secs: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_chunks: DEFAULT_MAX_CHUNKS,
            program_tag: DEFAULT_PROGRAM_TAG.to_string(),
            temp_root: None,
            refresh_on_enter: true,
            restore_last_path: true,
            read_timeout_secs: None,
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON document. Absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BridgeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.chunk_size == 0 {
            return Err(BridgeError::Config("chunk_size must be non-zero".into()));
        }
        if self.max_chunks == 0 {
            return Err(BridgeError::Config("max_chunks must be non-zero".into()));
        }
        if self.chunk_size.checked_mul(self.max_chunks).is_none() {
            return Err(BridgeError::Config(
                "chunk_size * max_chunks overflows".into(),
            ));
        }
        if self.program_tag.is_empty() || self.program_tag.contains('/') {
            return Err(BridgeError::Config(format!(
                "program_tag {:?} is not a valid file name prefix",
                self.program_tag
            )));
        }
        Ok(())
    }

    /// Maximum number of input bytes the bridge will ever hold.
    pub fn ceiling(&self) -> usize {
        self.chunk_size.saturating_mul(self.max_chunks)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }

    pub fn read_limits(&self) -> ReadLimits {
        ReadLimits {
            chunk_size: self.chunk_size,
            max_chunks: self.max_chunks,
            timeout: self.read_timeout(),
        }
    }

    pub fn resolved_temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}
