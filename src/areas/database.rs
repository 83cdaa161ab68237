use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TopoError, TopoResult};
use bytes::Bytes;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Read-only view over the loose objects in `.git/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Load and inflate the raw object named by `object_id`
    pub fn load(&self, object_id: &ObjectId) -> TopoResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> TopoResult<SlimCommit> {
        let object_content = self.load(object_id)?;

        SlimCommit::deserialize(object_id, &object_content)
    }

    /// Parent identifiers of a commit, in declared order
    pub fn read_parents(&self, object_id: &ObjectId) -> TopoResult<Vec<ObjectId>> {
        let commit = self.parse_object_as_commit(object_id)?;

        tracing::debug!(
            oid = object_id.to_short_oid(),
            parents = commit.parents.len(),
            "read commit"
        );

        Ok(commit.parents)
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> TopoResult<Bytes> {
        // read the object file
        let object_content = std::fs::read(&object_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => TopoError::ObjectNotFound {
                oid: object_id.clone(),
            },
            _ => TopoError::CorruptObject {
                oid: object_id.clone(),
                reason: format!("unable to read {}: {err}", object_path.display()),
            },
        })?;

        // decompress the object content
        Self::decompress(object_content.into()).map_err(|err| TopoError::CorruptObject {
            oid: object_id.clone(),
            reason: format!("unable to decompress object content: {err}"),
        })
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
