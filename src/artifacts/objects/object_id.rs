//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings. They name every object
//! in the repository and double as the object's storage location.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{TopoError, TopoResult};
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// Treated as an opaque key: ordering is lexicographic on the hex text,
/// never numeric. Stored lowercase, the way object paths are named.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated, lowercased ObjectId or `InvalidObjectId` if the length or
    /// characters are wrong
    pub fn try_parse(id: impl Into<String>) -> TopoResult<Self> {
        let mut id = id.into();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TopoError::InvalidObjectId { value: id });
        }

        id.make_ascii_lowercase();
        Ok(Self(id))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash, for log messages
    pub fn to_short_oid(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
