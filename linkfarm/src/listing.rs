//! Plain listing of the link directory.
//!
//! Stand-in for a real file-manager listing: one line per entry,
//! directories first, `name -> target` for links.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub target: Option<PathBuf>,
    pub is_dir: bool,
}

pub fn read_listing(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut entries = Vec::new();

    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let target = std::fs::read_link(&path).ok();
        // Follows the link: a link to a directory lists as a directory.
        let is_dir = std::fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);

        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            target,
            is_dir,
        });
    }

    // Sort: directories first, then alphabetical
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

pub fn render<W: Write>(dir: &Path, entries: &[ListingEntry], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}:", dir.display())?;
    if entries.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for entry in entries {
        let slash = if entry.is_dir { "/" } else { "" };
        match &entry.target {
            Some(target) => writeln!(out, "  {}{} -> {}", entry.name, slash, target.display())?,
            None => writeln!(out, "  {}{}", entry.name, slash)?,
        }
    }
    out.flush()
}
