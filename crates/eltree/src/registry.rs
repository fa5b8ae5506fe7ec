//! Identifier Registry
//!
//! Each node carries the set of `id` values present in its subtree. The
//! mutation engine keeps these sets exact after every append, so duplicate
//! detection only has to walk the ancestor chain of the insertion point.

use std::collections::BTreeSet;

use crate::{ElementTree, NodeId, TreeResult};

/// Set of id values visible in a subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: BTreeSet<String>,
}

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding a node's own id. Empty ids are not tracked.
    pub fn from_own(id: Option<&str>) -> Self {
        let mut set = Self::new();
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            set.ids.insert(id.to_string());
        }
        set
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Smallest id present in both sets
    pub fn first_conflict<'a>(&'a self, other: &'a IdSet) -> Option<&'a str> {
        self.ids.intersection(&other.ids).next().map(String::as_str)
    }

    /// Union `other` into this set
    pub fn extend_from(&mut self, other: &IdSet) {
        for id in &other.ids {
            if !self.ids.contains(id) {
                self.ids.insert(id.clone());
            }
        }
    }
}

impl ElementTree {
    /// Ids present in the subtree rooted at `node`
    pub fn visible_ids(&self, node: NodeId) -> TreeResult<&IdSet> {
        Ok(&self.node(node)?.visible_ids)
    }

    /// Check whether `id` is used anywhere in the tree containing `node`
    pub fn contains_id(&self, node: NodeId, id: &str) -> TreeResult<bool> {
        self.node(node)?;
        let root = self.root_of(node);
        Ok(self.node(root)?.visible_ids.contains(id))
    }

    /// Find the element carrying `id` in the tree containing `node`.
    ///
    /// Descends from the root, following whichever child still sees the id.
    pub fn get_element_by_id(&self, node: NodeId, id: &str) -> TreeResult<Option<NodeId>> {
        self.node(node)?;
        let mut current = self.root_of(node);

        'descend: loop {
            let data = self.node(current)?;
            if !data.visible_ids.contains(id) {
                return Ok(None);
            }
            if data.id() == Some(id) {
                return Ok(Some(current));
            }
            for child in data.children() {
                if self.node(child)?.visible_ids.contains(id) {
                    current = child;
                    continue 'descend;
                }
            }
            return Ok(None);
        }
    }
}
