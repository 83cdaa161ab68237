use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

/// Commit identifier to every branch whose ref file points at it
///
/// Several branches may share a head, so each entry holds a set and
/// insertion never replaces names already recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchMap {
    heads: BTreeMap<ObjectId, BTreeSet<BranchName>>,
}

impl BranchMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, oid: ObjectId, branch: BranchName) {
        self.heads.entry(oid).or_default().insert(branch);
    }

    /// Branch names pointing at `oid`, sorted lexicographically
    pub fn branches(&self, oid: &ObjectId) -> impl Iterator<Item = &BranchName> {
        self.heads.get(oid).into_iter().flatten()
    }

    /// Distinct head identifiers, in identifier order
    pub fn heads(&self) -> impl Iterator<Item = &ObjectId> {
        self.heads.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }
}

impl FromIterator<(ObjectId, BranchName)> for BranchMap {
    fn from_iter<I: IntoIterator<Item = (ObjectId, BranchName)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(BranchMap::new(), |mut acc, (oid, branch)| {
                acc.insert(oid, branch);
                acc
            })
    }
}
