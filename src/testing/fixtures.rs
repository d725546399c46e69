//! Sample records and a temporary directory tree for tests.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use tempfile::TempDir;

/// A student belonging to a study group, for key-selector joins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub group_id: u64,
    pub name: String,
}

/// A study group, the joined side of [`Student`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
}

impl Student {
    pub fn new(group_id: u64, name: impl Into<String>) -> Self {
        Self {
            group_id,
            name: name.into(),
        }
    }
}

impl Group {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Five students; group 1 has two members and group 2 does not exist in
/// [`sample_groups`].
///
/// # Example
///
/// ```
/// use pipeflow::testing::sample_students;
///
/// assert_eq!(sample_students().len(), 5);
/// ```
#[must_use]
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new(0, "a"),
        Student::new(1, "b"),
        Student::new(2, "c"),
        Student::new(3, "d"),
        Student::new(1, "e"),
    ]
}

/// Groups 0, 1 and 3.
#[must_use]
pub fn sample_groups() -> Vec<Group> {
    vec![Group::new(0, "f"), Group::new(1, "g"), Group::new(3, "i")]
}

/// A department name that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
}

/// Validate a department name: it must be non-empty and contain no space.
///
/// # Errors
///
/// Returns a message describing the first rule the name breaks.
///
/// ```
/// use pipeflow::testing::parse_department;
///
/// assert!(parse_department("it").is_ok());
/// assert_eq!(parse_department(""), Err("Department name is empty".to_string()));
/// ```
pub fn parse_department(name: &str) -> Result<Department, String> {
    if name.is_empty() {
        return Err("Department name is empty".to_string());
    }
    if name.contains(' ') {
        return Err("Department name contains space".to_string());
    }
    Ok(Department {
        name: name.to_string(),
    })
}

/// Sentences for word-count style pipelines.
#[must_use]
pub fn sample_sentences() -> Vec<String> {
    vec![
        "the quick brown fox".to_string(),
        "jumps over the lazy dog".to_string(),
        "the dog barks".to_string(),
        "the fox runs away".to_string(),
    ]
}

/// A temporary directory populated through a builder, removed on drop.
///
/// Relative paths may contain `/`; missing parent directories are created.
///
/// # Example
///
/// ```
/// use pipeflow::testing::TempTree;
///
/// let tree = TempTree::new()?.file("sub/one.txt", "1")?;
/// assert_eq!(std::fs::read_to_string(tree.path().join("sub/one.txt"))?, "1");
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Debug)]
pub struct TempTree {
    root: TempDir,
}

impl TempTree {
    /// Create an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let root = TempDir::new().context("failed to create temporary directory")?;
        Ok(Self { root })
    }

    /// Write `contents` to `rel`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `rel` escapes the tree or the file cannot be written.
    pub fn file(self, rel: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<Self> {
        let path = self.resolve(rel.as_ref())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(self)
    }

    /// Create the (possibly nested) directory `rel`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rel` escapes the tree or the directory cannot be created.
    pub fn dir(self, rel: impl AsRef<Path>) -> Result<Self> {
        let path = self.resolve(rel.as_ref())?;
        fs::create_dir_all(&path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(self)
    }

    /// Root of the tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    fn resolve(&self, rel: &Path) -> Result<std::path::PathBuf> {
        if !rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!("{} is not a relative path inside the tree", rel.display());
        }
        Ok(self.root.path().join(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_tree_rejects_escaping_paths() -> Result<()> {
        let tree = TempTree::new()?;
        assert!(tree.file("../outside.txt", "x").is_err());
        Ok(())
    }

    #[test]
    fn temp_tree_is_removed_on_drop() -> Result<()> {
        let tree = TempTree::new()?.file("a/b.txt", "b")?.dir("c")?;
        let root = tree.path().to_path_buf();
        assert!(root.join("a/b.txt").is_file());
        assert!(root.join("c").is_dir());
        drop(tree);
        assert!(!root.exists());
        Ok(())
    }

    #[test]
    fn department_rules_are_checked_in_order() {
        assert_eq!(
            parse_department("bad department"),
            Err("Department name contains space".to_string())
        );
        assert_eq!(
            parse_department("good-department").map(|d| d.name),
            Ok("good-department".to_string())
        );
    }
}
