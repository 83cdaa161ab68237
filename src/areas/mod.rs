//! Core repository components
//!
//! The on-disk pieces of a repository that the ordering reads from:
//!
//! - `database`: Loose object database (`.git/objects`)
//! - `refs`: Local branch references (`.git/refs/heads`)
//! - `repository`: Repository discovery and coordination

pub mod database;
pub mod refs;
pub mod repository;
