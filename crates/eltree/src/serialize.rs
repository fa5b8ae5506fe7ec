//! Serializer
//!
//! Indented markup output. Layout per element:
//!
//! ```text
//! {indent}<tag name="value">
//! {space}{leading text}
//! ...children at indent + 1, space + 1...
//! {indent}</tag>
//! ```
//!
//! Text that follows a child goes on its own `{space}` line at that point.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{Content, ElementTree, NodeId, Tag, TreeResult};

/// Pending output while walking a subtree
enum Step {
    Open(NodeId, usize, usize),
    Text(String, usize),
    Close(Tag, usize),
}

impl ElementTree {
    /// Render `node` and its subtree.
    ///
    /// Text and attribute values are escaped unless
    /// [`RenderConfig::escape`](crate::RenderConfig::escape) is turned off.
    pub fn render(&self, node: NodeId) -> TreeResult<String> {
        self.render_at(node, 0, 1)
    }

    /// Render with explicit starting indentation levels
    pub fn render_at(&self, node: NodeId, indent_level: usize, space_level: usize) -> TreeResult<String> {
        let mut out = String::new();
        self.write_subtree(&mut out, node, indent_level, space_level)?;
        Ok(out)
    }

    /// Doctype preamble followed by the rendered markup
    pub fn render_document(&self, node: NodeId) -> TreeResult<String> {
        let body = self.render(node)?;
        Ok(format!("{}\n{}", self.config().doctype, body))
    }

    /// Write the rendered document to `path`.
    ///
    /// The document is rendered in full before anything touches the
    /// filesystem, then written to a temporary file beside `path` and
    /// renamed into place. On error `path` is left as it was. An existing
    /// destination keeps its permissions; a new one gets the usual
    /// umask-filtered mode.
    pub fn render_to_file(&self, node: NodeId, path: impl AsRef<Path>) -> TreeResult<()> {
        let path = path.as_ref();
        let document = self.render_document(node)?;

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

        #[allow(unused_mut)]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut file = builder.tempfile_in(dir)?;
        if let Some(permissions) = existing {
            file.as_file().set_permissions(permissions)?;
        }

        file.write_all(document.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|err| err.error)?;

        tracing::info!("Wrote {} bytes to {}", document.len(), path.display());
        Ok(())
    }

    /// Write the rendered document to the configured output path
    pub fn render_to_output(&self, node: NodeId) -> TreeResult<()> {
        self.render_to_file(node, &self.config().output_path)
    }

    /// Explicit stack instead of recursion; depth is bounded by memory only
    fn write_subtree(
        &self,
        out: &mut String,
        root: NodeId,
        indent_level: usize,
        space_level: usize,
    ) -> TreeResult<()> {
        let unit = &self.config().indent_unit;
        let mut stack = vec![Step::Open(root, indent_level, space_level)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(id, indent_level, space_level) => {
                    let node = self.node(id)?;
                    out.push_str(&unit.repeat(indent_level));
                    out.push('<');
                    out.push_str(node.tag().as_str());
                    for attr in node.attributes() {
                        out.push(' ');
                        out.push_str(&attr.name);
                        out.push_str("=\"");
                        out.push_str(&self.escape(&attr.value));
                        out.push('"');
                    }
                    out.push_str(">\n");

                    let mut items = node.content().iter().peekable();
                    let mut text = String::new();
                    while let Some(Content::Text(fragment)) = items.peek() {
                        text.push_str(fragment);
                        items.next();
                    }
                    // The leading text line is always present, even when empty
                    self.write_text_line(out, &unit.repeat(space_level), &text);
                    text.clear();

                    let mut pending = Vec::new();
                    for item in items {
                        match item {
                            Content::Text(fragment) => text.push_str(fragment),
                            Content::Child(child) => {
                                if !text.is_empty() {
                                    pending.push(Step::Text(std::mem::take(&mut text), space_level));
                                }
                                pending.push(Step::Open(*child, indent_level + 1, space_level + 1));
                            }
                        }
                    }
                    if !text.is_empty() {
                        pending.push(Step::Text(text, space_level));
                    }

                    stack.push(Step::Close(node.tag(), indent_level));
                    stack.extend(pending.into_iter().rev());
                }
                Step::Text(text, space_level) => {
                    self.write_text_line(out, &unit.repeat(space_level), &text);
                }
                Step::Close(tag, indent_level) => {
                    out.push_str(&unit.repeat(indent_level));
                    out.push_str("</");
                    out.push_str(tag.as_str());
                    out.push_str(">\n");
                }
            }
        }
        Ok(())
    }

    fn write_text_line(&self, out: &mut String, space: &str, text: &str) {
        out.push_str(space);
        out.push_str(&self.escape(text));
        out.push('\n');
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config().escape {
            escape_markup(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Escape `&`, `<`, `>` and `"`
pub(crate) fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
