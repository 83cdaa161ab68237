//! Command implementations
//!
//! - `porcelain`: User-facing commands (`topo-order`)

pub mod porcelain;
