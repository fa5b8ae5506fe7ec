//! Render Configuration

use std::path::PathBuf;

/// Serializer configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indentation unit, repeated once per level
    pub indent_unit: String,

    /// Preamble line written before the markup by file output
    pub doctype: String,

    /// Destination used by `ElementTree::render_to_output`
    pub output_path: PathBuf,

    /// Escape `&`, `<`, `>` and `"` in text and attribute values. On by
    /// default; turn off to write them verbatim.
    pub escape: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            doctype: "<!DOCTYPE html>".to_string(),
            output_path: PathBuf::from("output.html"),
            escape: true,
        }
    }
}
