//! Descendant-before-ancestor ordering
//!
//! Kahn's algorithm run from the tips down: a commit becomes ready once all
//! of its children have been emitted. Remaining child counts live in a
//! separate table so the graph itself stays intact for annotation.
//!
//! ## Tie-break
//!
//! The ready queue is FIFO. It is seeded with childless commits in
//! identifier order, and parents are released in the order the child
//! declares them, so the output is a pure function of the graph.

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TopoError, TopoResult};
use std::collections::{HashMap, VecDeque};

pub struct TopologicalSorter<'g> {
    graph: &'g CommitGraph,
}

impl<'g> TopologicalSorter<'g> {
    pub fn new(graph: &'g CommitGraph) -> Self {
        Self { graph }
    }

    /// Order every commit so each one precedes all of its ancestors
    ///
    /// Fails with `CycleDetected` if some commits can never become ready; no
    /// partial order is returned in that case.
    pub fn sort(&self) -> TopoResult<Vec<&'g ObjectId>> {
        let mut remaining_children = self
            .graph
            .nodes()
            .map(|node| (node.oid(), node.children().len()))
            .collect::<HashMap<_, _>>();

        let mut ready = self
            .graph
            .nodes()
            .filter(|node| node.children().is_empty())
            .map(|node| node.oid())
            .collect::<VecDeque<_>>();

        let mut order = Vec::with_capacity(self.graph.len());

        while let Some(oid) = ready.pop_front() {
            order.push(oid);

            let Some(node) = self.graph.get(oid) else {
                continue;
            };

            for (i, parent) in node.parents().iter().enumerate() {
                // a parent declared twice by the same child is a single edge
                if node.parents()[..i].contains(parent) {
                    continue;
                }

                let Some(count) = remaining_children.get_mut(parent) else {
                    continue;
                };

                *count -= 1;
                if *count == 0 {
                    ready.push_back(parent);
                }
            }
        }

        if order.len() < self.graph.len() {
            let unresolved = self.graph.len() - order.len();
            tracing::debug!(unresolved, "topological sort stalled");

            return Err(TopoError::CycleDetected { unresolved });
        }

        tracing::debug!(commits = order.len(), "sorted commit graph");

        Ok(order)
    }
}
