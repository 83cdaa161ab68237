//! Commit ancestry graph
//!
//! - `commit_node`: a commit with its ordered parents and discovered children
//! - `commit_graph`: identifier to node map covering everything reachable
//!   from the branch heads
//! - `builder`: frontier traversal that populates the graph

pub mod builder;
pub mod commit_graph;
pub mod commit_node;
