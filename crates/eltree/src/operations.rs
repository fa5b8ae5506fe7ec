//! Mutation Engine
//!
//! Node construction and append. Every operation validates the whole request
//! first and commits only when nothing can fail, so a rejected call leaves
//! the arena untouched.

use std::collections::HashSet;

use crate::validate::{validate_attributes, validate_content, validate_tag};
use crate::{Content, ElementTree, IdSet, Node, NodeId, TreeError, TreeResult};

/// Content accepted by construction and append
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentInput {
    #[default]
    Empty,
    Text(String),
    Node(NodeId),
    Sequence(Vec<Content>),
}

impl ContentInput {
    /// Flatten into content items, preserving order
    pub fn into_items(self) -> Vec<Content> {
        match self {
            ContentInput::Empty => Vec::new(),
            ContentInput::Text(text) => vec![Content::Text(text)],
            ContentInput::Node(id) => vec![Content::Child(id)],
            ContentInput::Sequence(items) => items,
        }
    }
}

impl From<()> for ContentInput {
    fn from(_: ()) -> Self {
        ContentInput::Empty
    }
}

impl From<&str> for ContentInput {
    fn from(text: &str) -> Self {
        ContentInput::Text(text.to_string())
    }
}

impl From<String> for ContentInput {
    fn from(text: String) -> Self {
        ContentInput::Text(text)
    }
}

impl From<NodeId> for ContentInput {
    fn from(id: NodeId) -> Self {
        ContentInput::Node(id)
    }
}

impl From<Content> for ContentInput {
    fn from(item: Content) -> Self {
        ContentInput::Sequence(vec![item])
    }
}

impl From<Vec<NodeId>> for ContentInput {
    fn from(ids: Vec<NodeId>) -> Self {
        ContentInput::Sequence(ids.into_iter().map(Content::Child).collect())
    }
}

impl From<&[NodeId]> for ContentInput {
    fn from(ids: &[NodeId]) -> Self {
        ContentInput::Sequence(ids.iter().copied().map(Content::Child).collect())
    }
}

impl<const N: usize> From<[NodeId; N]> for ContentInput {
    fn from(ids: [NodeId; N]) -> Self {
        ContentInput::Sequence(ids.into_iter().map(Content::Child).collect())
    }
}

impl From<Vec<Content>> for ContentInput {
    fn from(items: Vec<Content>) -> Self {
        ContentInput::Sequence(items)
    }
}

impl ElementTree {
    /// Create a node, attaching any nodes given as content.
    ///
    /// Content nodes must be roots; the new node's own id must not collide
    /// with ids already inside them.
    pub fn new_node<K, V>(
        &mut self,
        tag: &str,
        content: impl Into<ContentInput>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> TreeResult<NodeId>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let tag = validate_tag(tag)?;
        let attributes = validate_attributes(attributes)?;
        let items = validate_content(self, content.into())?;

        let node = Node::new(tag, attributes);
        let incoming = self
            .check_attach(None, &node.visible_ids, &items)
            .inspect_err(|err| tracing::warn!("Rejected <{}> construction: {}", tag, err))?;

        let id = self.alloc(node);
        self.commit_attach(id, items, &incoming);
        tracing::debug!("Created <{}> {} with {} item(s)", tag, id, self.node(id)?.content.len());
        Ok(id)
    }

    /// Append text and/or root nodes to `parent`, all or nothing.
    pub fn append(&mut self, parent: NodeId, children: impl Into<ContentInput>) -> TreeResult<()> {
        let items = validate_content(self, children.into())?;
        let base = &self.node(parent)?.visible_ids;

        let incoming = self
            .check_attach(Some(parent), base, &items)
            .inspect_err(|err| tracing::warn!("Rejected append to {}: {}", parent, err))?;

        let count = items.len();
        self.commit_attach(parent, items, &incoming);
        tracing::debug!("Appended {} item(s) to {}", count, parent);
        Ok(())
    }

    /// Append a text fragment to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> TreeResult<()> {
        self.append(parent, ContentInput::Text(text.into()))
    }

    /// Validate attaching `items` under `recipient` (None while the recipient
    /// is still being constructed). `base` is the recipient's visible ids.
    ///
    /// Returns the union of ids the items bring in.
    fn check_attach(
        &self,
        recipient: Option<NodeId>,
        base: &IdSet,
        items: &[Content],
    ) -> TreeResult<IdSet> {
        let recipient_root = recipient.map(|r| self.root_of(r));
        let mut seen = HashSet::new();
        let mut incoming = IdSet::new();

        for child in items.iter().filter_map(Content::as_child) {
            let node = self.node(child)?;
            if Some(child) == recipient || Some(child) == recipient_root {
                return Err(TreeError::HierarchyRequest {
                    reason: format!("{child} cannot be appended inside its own tree"),
                });
            }
            if node.parent.is_some() {
                return Err(TreeError::AlreadyAttached(child));
            }
            if !seen.insert(child) {
                return Err(TreeError::HierarchyRequest {
                    reason: format!("{child} appears more than once"),
                });
            }
            if let Some(id) = base
                .first_conflict(&node.visible_ids)
                .or_else(|| incoming.first_conflict(&node.visible_ids))
            {
                return Err(TreeError::DuplicateId { id: id.to_string() });
            }
            incoming.extend_from(&node.visible_ids);
        }

        // Ancestors may see ids the recipient does not
        if let Some(recipient) = recipient {
            for ancestor in self.ancestors(recipient) {
                if let Some(id) = self.node(ancestor)?.visible_ids.first_conflict(&incoming) {
                    return Err(TreeError::DuplicateId { id: id.to_string() });
                }
            }
        }

        Ok(incoming)
    }

    /// Apply a checked attach. Must not fail.
    fn commit_attach(&mut self, recipient: NodeId, items: Vec<Content>, incoming: &IdSet) {
        for item in items {
            if let Content::Child(child) = item {
                self.node_mut(child).parent = Some(recipient);
            }
            self.node_mut(recipient).content.push(item);
        }

        if incoming.is_empty() {
            return;
        }
        let mut cursor = Some(recipient);
        while let Some(id) = cursor {
            let node = self.node_mut(id);
            node.visible_ids.extend_from(incoming);
            tracing::trace!("Propagated {} id(s) to {}", incoming.len(), id);
            cursor = node.parent;
        }
    }
}
