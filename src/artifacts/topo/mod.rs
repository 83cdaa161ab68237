//! Topological ordering of the commit graph
//!
//! - `sorter`: descendant-before-ancestor order with cycle detection
//! - `annotator`: branch labels and jump markers for the ordered listing

pub mod annotator;
pub mod sorter;
