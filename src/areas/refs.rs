//! Local branch references
//!
//! Every local branch is a file under `.git/refs/heads`, possibly nested in
//! directories (`refs/heads/feature/login`). The file holds the 40-character
//! identifier of the branch tip followed by a newline.
//!
//! Packed refs (`.git/packed-refs`) and symbolic refs are not read.

use crate::artifacts::branch::branch_map::BranchMap;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Suffix git uses for ref files that are being rewritten
const LOCK_SUFFIX: &str = ".lock";

/// Git references manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Every branch under `refs/heads`, with the commit it points at
    pub fn list_branches(&self) -> anyhow::Result<Vec<(BranchName, ObjectId)>> {
        let heads_path = self.heads_path();
        let mut branches = Vec::new();

        for entry in WalkDir::new(&heads_path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable ref entry");
                    continue;
                }
            };

            if !entry.file_type().is_file()
                || entry.file_name().to_string_lossy().ends_with(LOCK_SUFFIX)
            {
                continue;
            }

            let Some(branch_name) = entry
                .path()
                .strip_prefix(&heads_path)
                .ok()
                .and_then(BranchName::from_relative_path)
            else {
                tracing::warn!(path = %entry.path().display(), "skipping ref with non UTF-8 name");
                continue;
            };

            let oid = Self::read_ref_file(entry.path())
                .with_context(|| format!("failed to resolve branch {branch_name}"))?;
            branches.push((branch_name, oid));
        }

        Ok(branches)
    }

    /// Group branch names by the commit they point at
    pub fn branch_map(&self) -> anyhow::Result<BranchMap> {
        let branch_map = self
            .list_branches()?
            .into_iter()
            .map(|(branch_name, oid)| (oid, branch_name))
            .collect::<BranchMap>();

        tracing::info!(heads = branch_map.heads().count(), "discovered branch heads");

        Ok(branch_map)
    }

    fn read_ref_file(path: &Path) -> anyhow::Result<ObjectId> {
        // only the first line carries the identifier
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.lines().next().unwrap_or_default().trim();

        Ok(ObjectId::try_parse(content)?)
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
