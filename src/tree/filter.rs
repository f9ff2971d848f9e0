//! Name filtering for tree walking

/// Prefix marking an entry as hidden.
pub const HIDDEN_PREFIX: char = '.';

/// Directory name that is never descended into.
pub const NODE_MODULES: &str = "node_modules";

/// Decides which directory entries survive, based purely on their names.
#[derive(Debug, Clone, Copy)]
pub struct NameFilter {
    ignore_hidden: bool,
}

impl NameFilter {
    pub fn new(ignore_hidden: bool) -> Self {
        Self { ignore_hidden }
    }

    /// Check if a subdirectory should be descended into.
    pub fn keep_dir(&self, name: &str) -> bool {
        if name == NODE_MODULES {
            return false;
        }
        !(self.ignore_hidden && is_hidden(name))
    }

    /// Check if a file should be listed.
    pub fn keep_file(&self, name: &str) -> bool {
        !(self.ignore_hidden && is_hidden(name))
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}
