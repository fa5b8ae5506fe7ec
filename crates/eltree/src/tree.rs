//! Element Tree (arena-based allocation)

use crate::{Node, NodeId, RenderConfig, TreeError, TreeResult};

/// Arena holding one or more element trees.
///
/// Every node without a parent is the root of its own tree; id uniqueness is
/// enforced per tree, so independent trees may reuse the same ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTree {
    nodes: Vec<Node>,
    config: RenderConfig,
}

impl ElementTree {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new empty arena with custom render settings
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Check whether `id` names a node of this arena
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes across all trees
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Roots of every tree in the arena, in creation order
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_root())
            .map(|(index, _)| NodeId(index as u32))
    }

    pub(crate) fn node(&self, id: NodeId) -> TreeResult<&Node> {
        self.nodes.get(id.index()).ok_or(TreeError::NodeNotFound(id))
    }

    /// Infallible access for handles already checked by the caller
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}
