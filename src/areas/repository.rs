use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::TopoError;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory searched for while walking upward
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working tree root is `path`
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR_NAME);

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    /// Open the closest repository enclosing `start`
    ///
    /// Walks from `start` towards the filesystem root and stops at the first
    /// directory that contains a `.git` directory.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let root = Self::find_root(start)?;
        tracing::debug!(root = %root.display(), "found repository");

        Self::new(&root, writer)
    }

    pub fn find_root(start: &Path) -> Result<Box<Path>, TopoError> {
        let mut current = Some(start);

        while let Some(dir) = current {
            if dir.join(GIT_DIR_NAME).is_dir() {
                return Ok(dir.into());
            }
            current = dir.parent();
        }

        Err(TopoError::RepositoryNotFound {
            start: start.to_path_buf(),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
