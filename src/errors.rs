//! Failures reported by the commit graph core
//!
//! Every variant is fatal for a single invocation: the object store is a
//! local, presumed-consistent data source, so nothing is retried and no
//! partial listing is ever printed.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopoError {
    /// No `.git` directory between the start directory and the filesystem root.
    #[error("Not inside a Git repository (searched upward from {})", .start.display())]
    RepositoryNotFound { start: PathBuf },

    /// A head or parent identifier has no loose object file.
    #[error("object {oid} not found in the object database")]
    ObjectNotFound { oid: ObjectId },

    /// The object file exists but cannot be inflated or decoded.
    #[error("object {oid} is corrupt: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    /// Some nodes still have unprocessed children once the ready queue drains.
    #[error("cycle detected in commit graph: {unresolved} commit(s) could not be ordered")]
    CycleDetected { unresolved: usize },

    #[error("invalid object ID: {value:?}")]
    InvalidObjectId { value: String },
}

pub type TopoResult<T> = Result<T, TopoError>;
