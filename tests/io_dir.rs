#![cfg(feature = "fs")]

use anyhow::Result;
use pipeflow::testing::*;
use pipeflow::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

fn sample_tree() -> Result<TempTree> {
    TempTree::new()?
        .dir("subdir")?
        .dir("empty_subdir")?
        .file("file1.txt", "a")?
        .file("file2.dat", "a")?
        .file("subdir/file3.txt", "a")?
        .file("subdir/file4.log", "a")
}

fn file_names(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn non_recursive_listing_sees_top_level_files_and_dirs() -> Result<()> {
    let tree = sample_tree()?;
    let entries = dir(tree.path(), false) | as_vec();

    let dirs = entries.iter().filter(|p| p.is_dir()).count();
    let files = entries.len() - dirs;
    assert_eq!(files, 2);
    assert_eq!(dirs, 2);
    Ok(())
}

#[test]
fn recursive_listing_finds_every_file() -> Result<()> {
    let tree = sample_tree()?;
    let files = dir(tree.path(), true) | filter(|p: &PathBuf| !p.is_dir()) | as_vec();

    assert_eq!(files.len(), 4);
    assert_eq!(
        file_names(&files),
        BTreeSet::from(
            ["file1.txt", "file2.dat", "file3.txt", "file4.log"].map(String::from)
        )
    );
    Ok(())
}

#[test]
fn recursive_listing_includes_directories() -> Result<()> {
    let tree = sample_tree()?;
    let entries = dir(tree.path(), true) | as_vec();
    assert!(entries.iter().any(|p| p.ends_with("subdir")));
    assert!(entries.iter().any(|p| p.ends_with("empty_subdir")));
    assert_all(&entries, |p| p.starts_with(tree.path()));
    Ok(())
}

#[test]
fn missing_root_is_an_empty_flow() {
    let entries = dir("nonexistent_dir_12345", false) | as_vec();
    assert!(entries.is_empty());
    let entries = dir(Path::new("nonexistent_dir_12345"), true) | as_vec();
    assert!(entries.is_empty());
}

#[test]
fn file_root_is_an_empty_flow() -> Result<()> {
    let tree = sample_tree()?;
    let entries = dir(tree.path().join("file1.txt"), true) | as_vec();
    assert!(entries.is_empty());
    Ok(())
}

#[test]
fn filter_by_extension() -> Result<()> {
    let tree = sample_tree()?;
    let texts = dir(tree.path(), true)
        | filter(|p: &PathBuf| !p.is_dir() && p.extension().is_some_and(|e| e == "txt"))
        | as_vec();

    assert_eq!(texts.len(), 2);
    assert_eq!(
        file_names(&texts),
        BTreeSet::from(["file1.txt".to_string(), "file3.txt".to_string()])
    );
    Ok(())
}

#[test]
fn root_with_glob_metacharacters_is_listed_literally() -> Result<()> {
    let tree = TempTree::new()?.file("odd[1]/inside.txt", "x")?;
    let entries = dir(tree.path().join("odd[1]"), false) | as_vec();
    assert_eq!(file_names(&entries), BTreeSet::from(["inside.txt".to_string()]));
    Ok(())
}

#[test]
fn glob_files_returns_sorted_files_only() -> Result<()> {
    let tree = sample_tree()?;
    let pattern = format!("{}/**/*", tree.path().display());
    let files = glob_files(&pattern)? | as_vec();

    assert_eq!(files.len(), 4);
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
    assert_all(&files, |p| p.is_file());
    Ok(())
}

#[test]
fn glob_files_without_matches_is_empty_but_required_fails() -> Result<()> {
    let tree = sample_tree()?;
    let pattern = format!("{}/*.csv", tree.path().display());

    assert_eq!(glob_files(&pattern)?.len(), 0);
    assert!(glob_files_required(&pattern).is_err());
    Ok(())
}

#[test]
fn invalid_glob_pattern_is_an_error() {
    assert!(glob_files("[").is_err());
}

#[cfg(unix)]
#[test]
fn recursive_listing_follows_symlinked_directories() -> Result<()> {
    let tree = sample_tree()?;
    std::os::unix::fs::symlink(tree.path().join("subdir"), tree.path().join("linked"))?;

    let entries = dir(tree.path(), true) | as_vec();
    let through_link = tree.path().join("linked").join("file3.txt");
    assert!(entries.contains(&through_link));
    assert!(entries.contains(&tree.path().join("subdir").join("file3.txt")));
    Ok(())
}
