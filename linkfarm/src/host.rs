use linkfarm_core::SessionHost;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::listing;

/// The real process: `chdir`, print listings to `out`, keep a visit history.
#[derive(Debug)]
pub struct ProcessHost<W: Write> {
    out: W,
    history: Vec<PathBuf>,
}

impl<W: Write> ProcessHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionHost for ProcessHost<W> {
    fn change_dir(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn refresh_listing(&mut self, path: &Path) {
        let result = listing::read_listing(path)
            .and_then(|entries| listing::render(path, &entries, &mut self.out));
        if let Err(e) = result {
            tracing::warn!(dir = %path.display(), error = %e, "cannot list directory");
        }
    }

    fn record_visit(&mut self, path: &Path) {
        self.history.push(path.to_path_buf());
    }
}
