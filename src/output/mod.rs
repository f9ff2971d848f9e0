//! Output formatting for tree display
//!
//! - `tree`: buffered formatter turning walk callbacks into display lines
//! - `file`: writes the finished text to the output artifact

mod file;
mod tree;

pub use file::{DEFAULT_OUTPUT_FILE, write_output};
pub use tree::{FILE_MARKER, FOLDER_MARKER, TreeFormatter};
