use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;

/// One commit in the ancestry graph
///
/// `parents` keeps the order declared by the commit object. `children` is
/// filled in while the graph is built, as descendants declare this commit as
/// a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNode {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    children: BTreeSet<ObjectId>,
}

impl CommitNode {
    pub fn new(oid: ObjectId) -> Self {
        CommitNode {
            oid,
            parents: Vec::new(),
            children: BTreeSet::new(),
        }
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Children in identifier order
    pub fn children(&self) -> &BTreeSet<ObjectId> {
        &self.children
    }

    pub fn has_parent(&self, oid: &ObjectId) -> bool {
        self.parents.contains(oid)
    }

    pub(crate) fn push_parent(&mut self, parent: ObjectId) {
        self.parents.push(parent);
    }

    pub(crate) fn add_child(&mut self, child: ObjectId) {
        self.children.insert(child);
    }
}
