//! Context switch: move the session into the finished link directory.

use std::path::PathBuf;

use crate::error::BridgeError;
use crate::session::{Session, SessionHost};
use crate::view::SyntheticDirectory;

/// Enter `dir` and make it the session's current path.
///
/// On failure the directory is removed before returning and the session
/// keeps its previous location.
pub fn enter<H>(
    session: &mut Session,
    host: &mut H,
    dir: SyntheticDirectory,
) -> Result<PathBuf, BridgeError>
where
    H: SessionHost + ?Sized,
{
    if let Err(source) = host.change_dir(dir.path()) {
        let path = dir.path().to_path_buf();
        if let Err(e) = dir.remove() {
            tracing::warn!(dir = %path.display(), error = %e, "failed to remove link directory");
        }
        return Err(BridgeError::ContextSwitch { dir: path, source });
    }

    let path = dir.promote();
    session.current_path = path.clone();

    if session.refresh_on_enter {
        host.refresh_listing(&path);
        host.record_visit(&path);
    }

    // Earlier farms stay registered: links in this one may point into them.
    session.register_dir(path.clone());

    tracing::info!(dir = %path.display(), "entered link directory");
    Ok(path)
}
