//! Query Engine
//!
//! Pre-order traversal and the element lookups built on it. Results are
//! always in document order.

use crate::validate::validate_tag;
use crate::{ElementTree, NodeId, TreeResult};

/// Pre-order iterator over a subtree, text skipped
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    tree: &'a ElementTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.get(id) {
            // Reversed so the leftmost child is popped first
            self.stack.extend(node.children().rev());
        }
        Some(id)
    }
}

/// Iterator over the parent chain of a node, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a ElementTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.get(id).and_then(|node| node.parent());
        Some(id)
    }
}

impl ElementTree {
    /// `root` and every element below it, in document order
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let stack = if self.contains(root) { vec![root] } else { Vec::new() };
        Descendants { tree: self, stack }
    }

    /// Parent, grandparent, ... up to the root of the tree
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(node).and_then(|n| n.parent()),
        }
    }

    /// Topmost ancestor of `node` (the node itself for a root)
    pub fn root_of(&self, node: NodeId) -> NodeId {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Elements below (and including) `root` with the given tag
    pub fn find_by_tag(&self, root: NodeId, tag_name: &str) -> TreeResult<Vec<NodeId>> {
        let tag = validate_tag(tag_name)?;
        self.node(root)?;
        Ok(self
            .descendants(root)
            .filter(|&id| self.get(id).is_some_and(|node| node.tag() == tag))
            .collect())
    }

    /// Elements below (and including) `root` whose `attr_name` equals `attr_value`
    pub fn find_by_attr(
        &self,
        root: NodeId,
        attr_name: &str,
        attr_value: &str,
    ) -> TreeResult<Vec<NodeId>> {
        self.node(root)?;
        Ok(self
            .descendants(root)
            .filter(|&id| {
                self.get(id)
                    .is_some_and(|node| node.attributes().get(attr_name) == Some(attr_value))
            })
            .collect())
    }
}
