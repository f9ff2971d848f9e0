//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the root directory inside every `TestTree`.
pub const ROOT_NAME: &str = "R";

/// A temporary directory tree for testing.
///
/// The tree lives in `<tempdir>/R` so its root folder line is predictable;
/// the temp dir itself is a scratch area for output files.
/// Everything is cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(ROOT_NAME);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Path to the tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the scratch directory that contains the root.
    pub fn scratch(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file below the root.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and its parents) below the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
