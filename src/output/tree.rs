//! Tree formatter for buffered output
//!
//! `TreeFormatter` collects the lines produced by a walk and joins them into
//! the final text once the walk is done.

use crate::tree::{TreeOutput, indent};

/// Marker in front of a directory name.
pub const FOLDER_MARKER: &str = "📁 ";
/// Marker in front of a file name.
pub const FILE_MARKER: &str = "-> ";

/// Formatter for buffered tree output.
#[derive(Debug, Default)]
pub struct TreeFormatter {
    lines: Vec<String>,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in walk order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with `\n`. No trailing newline.
    pub fn format(&self) -> String {
        self.lines.join("\n")
    }
}

impl TreeOutput for TreeFormatter {
    fn output_dir(&mut self, name: &str, depth: usize) {
        self.lines
            .push(format!("{}{}{}", indent(depth), FOLDER_MARKER, name));
    }

    fn output_file(&mut self, name: &str, depth: usize) {
        self.lines
            .push(format!("{}{}{}", indent(depth), FILE_MARKER, name));
    }
}
