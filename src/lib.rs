//! Topological ordering of a repository's commit history
//!
//! Reads loose commit objects straight from `.git/objects`, rebuilds the
//! ancestry graph reachable from every local branch and prints it newest
//! first, marking the places where the linear listing jumps between
//! unrelated chains of commits.
//!
//! - `areas`: on-disk collaborators (object database, refs, repository root)
//! - `artifacts`: identifiers, branch names, the commit graph and its ordering
//! - `commands`: the user-facing `topo-order` command
//! - `errors`: failures the core can report

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
