use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Build a branch name from a ref file path relative to `refs/heads`
    ///
    /// Nested directories become `/`-separated name segments on every
    /// platform, so `feature/login` reads the same on Windows.
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let segments = path
            .components()
            .map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if segments.is_empty() {
            return None;
        }

        Some(Self(segments.join("/")))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
