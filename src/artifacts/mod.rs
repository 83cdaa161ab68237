//! Git data structures and algorithms
//!
//! - `branch`: Branch names and the head-to-branches lookup
//! - `graph`: Commit ancestry graph and its construction
//! - `objects`: Object identifiers and commit decoding
//! - `topo`: Topological ordering and annotation of the graph

pub mod branch;
pub mod graph;
pub mod objects;
pub mod topo;
