//! project-tree - save a folder-and-file outline of a directory tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::path::Path;

use tracing::info;

pub use error::{Result, TreeError};
pub use output::{DEFAULT_OUTPUT_FILE, TreeFormatter, write_output};
pub use tree::{RenderConfig, TreeOutput, TreeWalker, WalkStats};

/// Render the tree under `root` as display lines joined by `\n`.
///
/// Fails with [`TreeError::Filesystem`] if any visited directory cannot be
/// listed; nothing is returned from a partial walk.
pub fn render(root: &Path, config: &RenderConfig) -> Result<String> {
    let mut formatter = TreeFormatter::new();
    render_into(root, config, &mut formatter)?;
    Ok(formatter.format())
}

/// Walk `root` into any `TreeOutput`, logging the totals once done.
pub fn render_into<O: TreeOutput>(
    root: &Path,
    config: &RenderConfig,
    output: &mut O,
) -> Result<WalkStats> {
    let stats = TreeWalker::new(*config).walk(root, output)?;
    info!(
        "rendered {}: {} directories, {} files",
        root.display(),
        stats.dirs,
        stats.files
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Temp dir with a predictable root name `R`.
    fn root() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("R");
        fs::create_dir(&root).unwrap();
        (dir, root)
    }

    #[test]
    fn test_render_empty_root() {
        let (_dir, root) = root();
        assert_eq!(render(&root, &RenderConfig::default()).unwrap(), "📁 R");
    }

    #[test]
    fn test_render_single_file() {
        let (_dir, root) = root();
        fs::write(root.join("a.txt"), "hello").unwrap();

        assert_eq!(
            render(&root, &RenderConfig::default()).unwrap(),
            "📁 R\n-> a.txt"
        );
    }

    #[test]
    fn test_render_nested_example() {
        let (_dir, root) = root();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/x.txt"), "").unwrap();
        fs::write(root.join("y.txt"), "").unwrap();

        // Only one sibling per level, so the order is fixed
        assert_eq!(
            render(&root, &RenderConfig::default()).unwrap(),
            "📁 R\n-> y.txt\n│   📁 sub\n│   -> x.txt"
        );
    }

    #[test]
    fn test_render_max_depth_zero() {
        let (_dir, root) = root();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("top.txt"), "").unwrap();
        fs::write(root.join("sub/inner.txt"), "").unwrap();

        let config = RenderConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(render(&root, &config).unwrap(), "📁 R\n-> top.txt");
    }

    #[test]
    fn test_render_hidden_entries() {
        let (_dir, root) = root();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join(".git/HEAD"), "").unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join(".gitignore"), "").unwrap();

        let hidden = render(&root, &RenderConfig::default()).unwrap();
        assert_eq!(hidden, "📁 R");

        let config = RenderConfig {
            ignore_hidden: false,
            ..Default::default()
        };
        let shown = render(&root, &config).unwrap();
        assert!(shown.contains("-> .gitignore"));
        assert!(shown.contains("│   📁 .git"));
        assert!(shown.contains("│   -> HEAD"));
        assert!(shown.contains("│   │   📁 objects"));
        assert!(!shown.contains("node_modules"));
        assert!(!shown.contains("pkg"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let (_dir, root) = root();
        for path in ["a/b/c.txt", "a/d.txt", "e/f.txt", "g.txt", "h.txt"] {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, "").unwrap();
        }

        let config = RenderConfig::default();
        assert_eq!(
            render(&root, &config).unwrap(),
            render(&root, &config).unwrap()
        );
    }

    #[test]
    fn test_render_missing_root() {
        let (dir, _root) = root();
        let err = render(&dir.path().join("nope"), &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::Filesystem { .. }));
        assert_eq!(err.io_error().kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_render_root_is_file() {
        let (_dir, root) = root();
        let file = root.join("plain.txt");
        fs::write(&file, "").unwrap();

        let err = render(&file, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::Filesystem { .. }));
    }

    /// Formatter that deletes `target` when `trigger` is reported.
    struct RemovingFormatter {
        formatter: TreeFormatter,
        trigger: &'static str,
        target: std::path::PathBuf,
    }

    impl TreeOutput for RemovingFormatter {
        fn output_dir(&mut self, name: &str, depth: usize) {
            if name == self.trigger && self.target.exists() {
                fs::remove_dir_all(&self.target).unwrap();
            }
            self.formatter.output_dir(name, depth);
        }

        fn output_file(&mut self, name: &str, depth: usize) {
            self.formatter.output_file(name, depth);
        }
    }

    #[test]
    fn test_render_aborts_on_mid_walk_failure() {
        let (_dir, root) = root();
        fs::create_dir_all(root.join("sub/vanishing")).unwrap();
        fs::write(root.join("sub/vanishing/x.txt"), "").unwrap();
        fs::write(root.join("y.txt"), "").unwrap();

        let target = root.join("sub/vanishing");
        let mut output = RemovingFormatter {
            formatter: TreeFormatter::new(),
            trigger: "sub",
            target: target.clone(),
        };
        let err = render_into(&root, &RenderConfig::default(), &mut output).unwrap_err();
        match err {
            TreeError::Filesystem { path, source } => {
                assert_eq!(path, target);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // The tree is consistent again, so a fresh render succeeds
        assert_eq!(
            render(&root, &RenderConfig::default()).unwrap(),
            "📁 R\n-> y.txt\n│   📁 sub"
        );
    }
}
