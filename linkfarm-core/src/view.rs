//! Synthetic view builder.
//!
//! Creates the private link directory and fills it with one symlink per
//! record whose target exists. Every record gets an outcome in the
//! [`Manifest`]; one bad record never stops the rest.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::BridgeError;
use crate::tokenizer::PathRecord;

/// Length of the random part of the directory name.
const SUFFIX_LEN: usize = 6;

/// Only the session owner may list or enter the directory.
const DIR_MODE: u32 = 0o700;

/// `<root>/<tag>.XXXXXX`, owner-only, removed on drop unless promoted.
#[derive(Debug)]
pub struct SyntheticDirectory {
    dir: TempDir,
}

impl SyntheticDirectory {
    pub fn create(root: &Path, tag: &str) -> Result<Self, BridgeError> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("{tag}."))
            .rand_bytes(SUFFIX_LEN)
            .permissions(std::fs::Permissions::from_mode(DIR_MODE))
            .tempdir_in(root)
            .map_err(|source| BridgeError::DirectoryCreation {
                root: root.to_path_buf(),
                source,
            })?;

        tracing::debug!(dir = %dir.path().display(), "created link directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn link(&self, name: &OsStr, target: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, self.dir.path().join(name))
    }

    /// Hand the directory over to the session; it is no longer removed on drop.
    pub fn promote(self) -> PathBuf {
        self.dir.keep()
    }

    /// Remove the directory and every link in it, now.
    pub fn remove(self) -> io::Result<()> {
        self.dir.close()
    }
}

/// One symlink that made it into the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: OsString,
    pub target: PathBuf,
}

/// What happened to a single non-empty record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Created(LinkEntry),
    /// The resolved target did not exist or could not be stat'ed.
    SkippedNotFound { target: PathBuf },
    /// An earlier record already produced a link with this name.
    SkippedCollision { name: OsString, target: PathBuf },
    /// The symlink call itself failed, or there was no usable name.
    SkippedLinkFailed { target: PathBuf, reason: String },
}

impl RecordOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, RecordOutcome::Created(_))
    }
}

/// Ordered per-record outcomes for one bridge run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub outcomes: Vec<RecordOutcome>,
}

impl Manifest {
    pub fn links(&self) -> impl Iterator<Item = &LinkEntry> {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Created(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_created()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.created()
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::SkippedNotFound { .. }))
    }

    pub fn collisions(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::SkippedCollision { .. }))
    }

    pub fn link_failures(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::SkippedLinkFailed { .. }))
    }

    fn count(&self, pred: impl Fn(&RecordOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|&o| pred(o)).count()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} linked, {} missing, {} name collisions, {} failed",
            self.created(),
            self.not_found(),
            self.collisions(),
            self.link_failures()
        )
    }
}

/// Absolute source path for a record: verbatim if it starts with `/`,
/// otherwise relative to `base`.
pub fn resolve_source(record: &[u8], base: &Path) -> PathBuf {
    let raw = Path::new(OsStr::from_bytes(record));
    if record.starts_with(b"/") {
        raw.to_path_buf()
    } else {
        base.join(raw)
    }
}

/// Final path segment of the record, ignoring trailing slashes.
/// `None` when the record is nothing but slashes.
pub fn link_name(record: &[u8]) -> Option<&OsStr> {
    let end = record.iter().rposition(|&b| b != b'/')? + 1;
    let trimmed = &record[..end];
    let start = trimmed
        .iter()
        .rposition(|&b| b == b'/')
        .map_or(0, |i| i + 1);
    Some(OsStr::from_bytes(&trimmed[start..]))
}

/// Link every non-empty record into `dir`.
///
/// `base` is the working directory captured before the input was read.
pub fn build<I>(dir: &SyntheticDirectory, buf: &[u8], records: I, base: &Path) -> Manifest
where
    I: IntoIterator<Item = PathRecord>,
{
    let mut manifest = Manifest::default();
    let mut taken: HashSet<OsString> = HashSet::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let raw = record.bytes(buf);
        let target = resolve_source(raw, base);

        // lstat: a symlink record is mirrored, not followed.
        if let Err(e) = std::fs::symlink_metadata(&target) {
            tracing::debug!(path = %target.display(), error = %e, "skipping record");
            manifest
                .outcomes
                .push(RecordOutcome::SkippedNotFound { target });
            continue;
        }

        let Some(name) = link_name(raw) else {
            tracing::warn!(path = %target.display(), "ln: no usable link name");
            manifest.outcomes.push(RecordOutcome::SkippedLinkFailed {
                target,
                reason: "no usable link name".to_string(),
            });
            continue;
        };

        if taken.contains(name) {
            tracing::warn!(
                name = %name.to_string_lossy(),
                path = %target.display(),
                "ln: name already linked, keeping the first"
            );
            manifest.outcomes.push(RecordOutcome::SkippedCollision {
                name: name.to_os_string(),
                target,
            });
            continue;
        }

        match dir.link(name, &target) {
            Ok(()) => {
                taken.insert(name.to_os_string());
                manifest.outcomes.push(RecordOutcome::Created(LinkEntry {
                    name: name.to_os_string(),
                    target,
                }));
            }
            Err(e) => {
                tracing::warn!(
                    name = %name.to_string_lossy(),
                    path = %target.display(),
                    error = %e,
                    "ln: cannot create link"
                );
                manifest.outcomes.push(RecordOutcome::SkippedLinkFailed {
                    target,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(summary = %manifest, "link directory populated");
    manifest
}
