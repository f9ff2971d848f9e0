//! TreeWalker - depth-first, pre-order directory walk

use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::config::RenderConfig;
use super::filter::NameFilter;
use super::traversal::read_listing;
use super::utils::display_name;

/// Callback for walk output - receives each visited node in display order.
pub trait TreeOutput {
    /// A visited directory, before any of its files or subdirectories.
    fn output_dir(&mut self, name: &str, depth: usize);

    /// A listed file inside the directory most recently passed to `output_dir`.
    fn output_file(&mut self, name: &str, depth: usize);
}

/// Directory and file counts for a finished walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs: usize,
    pub files: usize,
}

/// Walks a directory tree top-down, one visit per directory.
///
/// Each directory is reported with its files before any subdirectory is
/// entered. Subdirectories are visited in enumeration order and never below
/// `max_depth`.
pub struct TreeWalker {
    config: RenderConfig,
    filter: NameFilter,
}

impl TreeWalker {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            filter: NameFilter::new(config.ignore_hidden),
        }
    }

    /// Walk `root` (depth 0), reporting every visited node to `output`.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        self.walk_dir(root, &display_name(root), 0, output, &mut stats)?;
        Ok(stats)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        output: &mut O,
        stats: &mut WalkStats,
    ) -> Result<()> {
        if depth > self.config.max_depth {
            debug!("depth limit reached at {}", path.display());
            return Ok(());
        }

        let listing = read_listing(path, &self.filter)?;
        debug!(
            "visiting {} (depth {depth}, {} dirs, {} files)",
            path.display(),
            listing.dirs.len(),
            listing.files.len()
        );

        output.output_dir(name, depth);
        stats.dirs += 1;

        for file in &listing.files {
            output.output_file(file, depth);
        }
        stats.files += listing.files.len();

        for (child_name, child_path) in &listing.dirs {
            self.walk_dir(child_path, child_name, depth + 1, output, stats)?;
        }

        Ok(())
    }
}
