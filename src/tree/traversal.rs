//! Directory enumeration used by the walker.
//!
//! Reads one directory, splits its entries into subdirectories and files in
//! the order the filesystem returns them, and applies the name filter.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeError};

use super::filter::NameFilter;

/// Filtered contents of one directory.
#[derive(Debug, Default)]
pub struct DirListing {
    /// Subdirectories to descend into, as `(name, path)`.
    pub dirs: Vec<(String, PathBuf)>,
    /// File names to list.
    pub files: Vec<String>,
}

/// Read and filter the immediate entries of `path`.
///
/// The directory handle is closed before this returns. Any error while
/// listing, reading an entry, or reading its type is returned as-is.
pub fn read_listing(path: &Path, filter: &NameFilter) -> Result<DirListing> {
    let entries = fs::read_dir(path).map_err(|e| TreeError::filesystem(path, e))?;

    let mut listing = DirListing::default();
    for entry in entries {
        let entry = entry.map_err(|e| TreeError::filesystem(path, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        let entry_path = entry.path();

        match classify(&entry)? {
            EntryKind::Dir => {
                if filter.keep_dir(&name) {
                    listing.dirs.push((name, entry_path));
                } else {
                    debug!("skipping directory {}", entry_path.display());
                }
            }
            EntryKind::File => {
                if filter.keep_file(&name) {
                    listing.files.push(name);
                }
            }
            EntryKind::DirLink => {
                debug!("not following directory symlink {}", entry_path.display());
            }
        }
    }

    Ok(listing)
}

enum EntryKind {
    Dir,
    File,
    /// Symlink whose target is a directory. Never followed, never listed.
    DirLink,
}

fn classify(entry: &fs::DirEntry) -> Result<EntryKind> {
    let file_type = entry
        .file_type()
        .map_err(|e| TreeError::filesystem(entry.path(), e))?;

    if file_type.is_dir() {
        return Ok(EntryKind::Dir);
    }

    // Broken links fail to resolve and are listed as plain files
    if file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
        return Ok(EntryKind::DirLink);
    }

    Ok(EntryKind::File)
}
