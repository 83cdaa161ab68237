//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `topo_order`: List every commit reachable from a local branch, newest
//!   first, with branch labels and jump markers

pub mod topo_order;
