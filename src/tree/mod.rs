//! Directory tree walking logic
//!
//! `TreeWalker` visits directories depth-first, pre-order, and hands every
//! directory and listed file to a `TreeOutput` implementation. Filtering is
//! by name only: dot-prefixed entries (unless shown) and `node_modules`.

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, RenderConfig};
pub use filter::{HIDDEN_PREFIX, NODE_MODULES, NameFilter, is_hidden};
pub use traversal::{DirListing, read_listing};
pub use utils::{INDENT_TOKEN, display_name, indent, resolve_root};
pub use walker::{TreeOutput, TreeWalker, WalkStats};
