use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Every way the bridge can abort as a whole.
///
/// Per-record problems (missing target, name collision, failed symlink) are
/// never errors; they end up in the [`Manifest`](crate::view::Manifest).
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The input stream returned an error. Nothing was created.
    #[error("failed to read path list from input: {0}")]
    Read(#[source] io::Error),

    /// The input stream did not reach end-of-stream in time. Nothing was created.
    #[error("timed out after {0:?} waiting for the path list")]
    ReadTimeout(Duration),

    /// The synthetic directory could not be created under its temp root.
    #[error("cannot create link directory under {}: {source}", .root.display())]
    DirectoryCreation {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The session could not enter the finished directory. It has been removed.
    #[error("cannot enter {}: {source}", .dir.display())]
    ContextSwitch {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration holds values the reader cannot work with.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BridgeError {
    /// True when the failure happened after real filesystem work was done
    /// (and then rolled back).
    pub fn after_work(&self) -> bool {
        matches!(self, BridgeError::ContextSwitch { .. })
    }
}
