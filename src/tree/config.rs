//! Configuration types for tree rendering

/// Depth cap applied when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Deepest directory level that is listed (root = 0).
    /// Directories below it are neither listed nor opened.
    pub max_depth: usize,
    /// Skip dot-prefixed files and directories.
    /// `node_modules` is skipped regardless.
    pub ignore_hidden: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_hidden: true,
        }
    }
}
