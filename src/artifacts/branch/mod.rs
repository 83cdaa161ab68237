//! Branch names and the head-to-branches lookup
//!
//! - `branch_name`: name of a branch, derived from its ref file path
//! - `branch_map`: commit identifier to the set of branches pointing at it

pub mod branch_map;
pub mod branch_name;
