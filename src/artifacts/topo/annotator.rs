//! Branch labels and jump markers for an ordered commit listing
//!
//! The ordered sequence is split into runs where every pair of consecutive
//! commits is a direct child/parent edge. Between two runs the listing
//! carries a marker pair:
//!
//! ```text
//! <id of last commit in run>
//! <its parents>=
//!
//! =<children of first commit in next run>
//! <id of first commit in next run>
//! ```
//!
//! so a downstream renderer can stitch independent chains back together.

use crate::artifacts::branch::branch_map::BranchMap;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use std::fmt;

/// One line of the annotated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// A commit and the branches pointing at it, sorted
    Commit {
        oid: ObjectId,
        branches: Vec<BranchName>,
    },
    /// `parents=`: the run ends at a commit whose successor is not a parent
    Departure { parents: Vec<ObjectId> },
    /// Empty separator written after a departure marker
    Gap,
    /// `=children`: a new run starts at a commit with these children
    Reentry { children: Vec<ObjectId> },
}

impl OutputLine {
    pub fn is_marker(&self) -> bool {
        matches!(self, OutputLine::Departure { .. } | OutputLine::Reentry { .. })
    }
}

fn join(ids: &[ObjectId]) -> String {
    ids.iter()
        .map(|oid| oid.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLine::Commit { oid, branches } => {
                write!(f, "{oid}")?;
                for branch in branches {
                    write!(f, " {branch}")?;
                }
                Ok(())
            }
            OutputLine::Departure { parents } => write!(f, "{}=", join(parents)),
            OutputLine::Gap => Ok(()),
            OutputLine::Reentry { children } => write!(f, "={}", join(children)),
        }
    }
}

pub struct SequenceAnnotator<'a> {
    graph: &'a CommitGraph,
    branch_map: &'a BranchMap,
}

impl<'a> SequenceAnnotator<'a> {
    pub fn new(graph: &'a CommitGraph, branch_map: &'a BranchMap) -> Self {
        Self { graph, branch_map }
    }

    /// Annotate `ordered` with branch names and jump markers
    ///
    /// Every identifier in `ordered` is expected to be a node of the graph;
    /// unknown identifiers are listed as commits without parents or children.
    pub fn render(&self, ordered: &[&ObjectId]) -> Vec<OutputLine> {
        let mut lines = Vec::with_capacity(ordered.len());
        let mut jumped = false;

        for (i, &oid) in ordered.iter().enumerate() {
            let node = self.graph.get(oid);

            if jumped {
                jumped = false;
                let children = node
                    .map(|node| node.children().iter().cloned().collect())
                    .unwrap_or_default();
                lines.push(OutputLine::Reentry { children });
            }

            lines.push(OutputLine::Commit {
                oid: oid.clone(),
                branches: self.branch_map.branches(oid).cloned().collect(),
            });

            let Some(&next) = ordered.get(i + 1) else {
                continue;
            };

            if !node.is_some_and(|node| node.has_parent(next)) {
                jumped = true;
                let parents = node
                    .map(|node| node.parents().to_vec())
                    .unwrap_or_default();
                lines.push(OutputLine::Departure { parents });
                lines.push(OutputLine::Gap);
            }
        }

        tracing::debug!(lines = lines.len(), "annotated commit listing");

        lines
    }
}
