//! Git commit object
//!
//! ## Format
//!
//! Inflated, a commit object reads:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Ordering history only needs the `parent` lines, so the rest of the
//! headers are not validated and may be missing entirely. Multi-line headers
//! (`mergetag`, `gpgsig`) continue on lines starting with a space.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TopoError, TopoResult};
use derive_new::new;

const PARENT_HEADER: &str = "parent";

/// Slim representation of a commit
///
/// Only the parent list, in the order the object declares them (first
/// parent first).
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SlimCommit {
    pub parents: Vec<ObjectId>,
}

impl SlimCommit {
    /// Decode an inflated object into its parent list
    ///
    /// The `<type> <size>\0` prefix is skipped and only the header lines
    /// (up to the first empty line) are scanned. Continuation lines and the
    /// message are never mistaken for a `parent` header. `oid` only names
    /// the object in errors.
    pub fn deserialize(oid: &ObjectId, content: &[u8]) -> TopoResult<Self> {
        let corrupt = |reason: String| TopoError::CorruptObject {
            oid: oid.clone(),
            reason,
        };

        let content = std::str::from_utf8(content)
            .map_err(|err| corrupt(format!("object content is not valid UTF-8: {err}")))?;

        let body = content
            .split_once('\0')
            .map_or(content, |(_header, body)| body);

        let mut parents = Vec::new();
        for line in body.lines().take_while(|line| !line.is_empty()) {
            if line.starts_with(' ') {
                continue;
            }

            let (key, value) = line.split_once(' ').unwrap_or((line, ""));
            if key != PARENT_HEADER {
                continue;
            }
            if value.is_empty() {
                return Err(corrupt("parent header without an object ID".to_string()));
            }

            let parent = ObjectId::try_parse(value.trim()).map_err(|err| corrupt(err.to_string()))?;
            parents.push(parent);
        }

        Ok(Self::new(parents))
    }
}
