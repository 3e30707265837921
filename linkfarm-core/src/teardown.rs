use std::io;
use std::path::PathBuf;

use crate::session::Session;

impl Session {
    /// Recursively remove every registered link directory, without prompting.
    ///
    /// Only the links are removed; their targets are never followed. No
    /// registration, or a directory that is already gone, is a no-op.
    /// Newest farms go first, so links into older farms are gone before
    /// their targets are. Returns the paths that were actually removed.
    ///
    /// On the first hard error the remaining directories stay registered
    /// and a later call retries them.
    pub fn teardown(&mut self) -> io::Result<Vec<PathBuf>> {
        let mut pending = self.take_registered_dirs();
        let mut removed = Vec::with_capacity(pending.len());

        while let Some(dir) = pending.pop() {
            match std::fs::remove_dir_all(&dir) {
                Ok(()) => {
                    tracing::debug!(dir = %dir.display(), "removed link directory");
                    removed.push(dir);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(dir = %dir.display(), "link directory already gone");
                }
                Err(e) => {
                    pending.push(dir);
                    for dir in pending {
                        self.register_dir(dir);
                    }
                    return Err(e);
                }
            }
        }

        Ok(removed)
    }
}
