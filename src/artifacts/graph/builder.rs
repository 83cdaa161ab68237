//! Frontier traversal from the branch heads
//!
//! Starting from every head, follow parent edges until nothing new is
//! reachable, creating one node per commit and linking parents and children
//! in both directions. A visited set makes the resulting graph independent
//! of the order the work stack is drained in, and guarantees termination even
//! if the stored objects contain a cycle (the sorter reports that later).

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TopoResult;
use std::collections::HashSet;

/// Builds a [`CommitGraph`] from a parent lookup function
///
/// # Type Parameters
///
/// * `ParentsLoaderFn` - Returns the parents of a commit in declared order.
///   The object database provides this in production; tests pass an
///   in-memory map.
pub struct CommitGraphBuilder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> TopoResult<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> CommitGraphBuilder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> TopoResult<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// Materialize every commit reachable from `heads`
    ///
    /// Any loader failure (a missing or corrupt object) aborts the build; a
    /// graph with silently truncated history is never returned.
    pub fn build<'h>(
        &self,
        heads: impl IntoIterator<Item = &'h ObjectId>,
    ) -> TopoResult<CommitGraph> {
        let mut graph = CommitGraph::new();
        let mut visited = HashSet::new();
        let mut stack = heads.into_iter().cloned().collect::<Vec<_>>();

        while let Some(oid) = stack.pop() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            graph.ensure_node(&oid);
            let parents = (self.parents_loader)(&oid)?;

            for parent in parents {
                graph.add_edge(&oid, &parent);
                if !visited.contains(&parent) {
                    stack.push(parent);
                }
            }
        }

        tracing::info!(commits = graph.len(), "built commit graph");

        Ok(graph)
    }
}
