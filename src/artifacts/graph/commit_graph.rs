use crate::artifacts::graph::commit_node::CommitNode;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Every commit reachable from the branch heads, keyed by identifier
///
/// Only grows while it is being built. Sorting and rendering read it through
/// shared references and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: BTreeMap<ObjectId, CommitNode>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a node exists for `oid`, creating an empty one if needed
    pub fn ensure_node(&mut self, oid: &ObjectId) -> &mut CommitNode {
        self.nodes
            .entry(oid.clone())
            .or_insert_with(|| CommitNode::new(oid.clone()))
    }

    /// Record that `child` declares `parent` as its next parent
    ///
    /// Appends to the child's parent list and inserts the child into the
    /// parent's children set, creating either node on demand.
    pub fn add_edge(&mut self, child: &ObjectId, parent: &ObjectId) {
        self.ensure_node(child).push_parent(parent.clone());
        self.ensure_node(parent).add_child(child.clone());
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&CommitNode> {
        self.nodes.get(oid)
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.nodes.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &CommitNode> {
        self.nodes.values()
    }

    /// Every `(parent, child)` edge, in identifier order of the child
    pub fn edges(&self) -> impl Iterator<Item = (&ObjectId, &ObjectId)> {
        self.nodes()
            .flat_map(|node| node.parents().iter().map(move |parent| (parent, node.oid())))
    }
}
