//! Session state the bridge reads and mutates.
//!
//! The host application owns one [`Session`]; the bridge only ever touches
//! it through `&mut`. Directory changes and listing refreshes go through the
//! [`SessionHost`] seam so tests can stand in for the process.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::BridgeConfig;

/// The parts of the running session the bridge interacts with.
pub trait SessionHost {
    /// Make `path` the active location (normally a `chdir`).
    fn change_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Redraw the listing of `path`. Called only when refresh-on-enter is on.
    fn refresh_listing(&mut self, _path: &Path) {}

    /// Remember that `path` was visited (directory history).
    fn record_visit(&mut self, _path: &Path) {}
}

/// Working context plus the teardown registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Where the session currently is.
    pub current_path: PathBuf,
    /// Restore the last visited path on exit. Cleared by the bridge.
    pub restore_last_path: bool,
    /// Refresh the listing right after a location change.
    pub refresh_on_enter: bool,
    registered_dirs: Vec<PathBuf>,
}

impl Session {
    pub fn new(current_path: impl Into<PathBuf>, config: &BridgeConfig) -> Self {
        Self {
            current_path: current_path.into(),
            restore_last_path: config.restore_last_path,
            refresh_on_enter: config.refresh_on_enter,
            registered_dirs: Vec::new(),
        }
    }

    /// Session rooted at the process's current working directory.
    pub fn from_process(config: &BridgeConfig) -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, config))
    }

    /// Directories that teardown will remove, oldest first.
    ///
    /// A later farm can link into an earlier one (a second run resolves
    /// relative records against the farm it was started from), so every
    /// farm stays until teardown.
    pub fn registered_dirs(&self) -> &[PathBuf] {
        &self.registered_dirs
    }

    /// Most recently registered directory, the one the session is in after
    /// a successful run.
    pub fn registered_dir(&self) -> Option<&Path> {
        self.registered_dirs.last().map(PathBuf::as_path)
    }

    /// Take ownership of `dir` for removal at teardown.
    pub(crate) fn register_dir(&mut self, dir: PathBuf) {
        self.registered_dirs.push(dir);
    }

    pub(crate) fn take_registered_dirs(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.registered_dirs)
    }
}
