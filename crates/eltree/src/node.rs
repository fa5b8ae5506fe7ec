//! Element Node
//!
//! A node owns its attributes and an ordered content list mixing text
//! fragments with child handles. Structure is only changed through the
//! mutation engine in `operations.rs`.

use std::fmt;

use crate::{AttributeMap, IdSet, NodeId};

/// Element tag, drawn from a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    P,
    Span,
    H1,
    H2,
    H3,
    H4,
    H5,
}

impl Tag {
    /// Every allowed tag, in declaration order
    pub const ALL: [Tag; 8] = [
        Tag::Div,
        Tag::P,
        Tag::Span,
        Tag::H1,
        Tag::H2,
        Tag::H3,
        Tag::H4,
        Tag::H5,
    ];

    /// Lowercase tag name
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
        }
    }

    /// Look up a tag by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Tag> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a node's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text fragment
    Text(String),
    /// Child element
    Child(NodeId),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Child(_) => None,
        }
    }

    #[inline]
    pub fn as_child(&self) -> Option<NodeId> {
        match self {
            Content::Child(id) => Some(*id),
            Content::Text(_) => None,
        }
    }
}

impl From<NodeId> for Content {
    fn from(id: NodeId) -> Self {
        Content::Child(id)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// Element node stored in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) tag: Tag,
    pub(crate) attributes: AttributeMap,
    pub(crate) content: Vec<Content>,
    /// Parent node (None if root)
    pub(crate) parent: Option<NodeId>,
    /// Every id value in this subtree, including our own
    pub(crate) visible_ids: IdSet,
}

impl Node {
    pub(crate) fn new(tag: Tag, attributes: AttributeMap) -> Self {
        let visible_ids = IdSet::from_own(attributes.id());
        Self {
            tag,
            attributes,
            content: Vec::new(),
            parent: None,
            visible_ids,
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Value of the `id` attribute, if any
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.attributes.id()
    }

    #[inline]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn visible_ids(&self) -> &IdSet {
        &self.visible_ids
    }

    /// Child elements in content order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.content.iter().filter_map(Content::as_child)
    }

    /// Concatenation of this node's own text fragments
    pub fn text(&self) -> String {
        self.content.iter().filter_map(Content::as_text).collect()
    }
}
