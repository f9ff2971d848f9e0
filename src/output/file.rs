//! Writing the rendered tree to disk

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, TreeError};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "project_structure.txt";

/// Write `contents` to `path` as UTF-8, replacing anything already there.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| TreeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
