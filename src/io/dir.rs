//! Directory listing and glob expansion.
//!
//! Both sources are built on the `glob` crate. [`dir`] escapes the root and appends `*`
//! (or `**/*` when recursive), so every entry below the root is matched, hidden ones
//! included, files and directories alike.
//!
//! # Examples
//!
//! ```no_run
//! use pipeflow::*;
//!
//! // All `.txt` files anywhere below `notes/`
//! let texts = dir("notes", true)
//!     | filter(|p: &std::path::PathBuf| p.extension().is_some_and(|e| e == "txt"))
//!     | as_vec();
//!
//! // Or with a pattern
//! let logs = glob_files("logs/*.log")? | as_vec();
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::flow::{DataFlow, OwnedFlow};
use anyhow::{Context, Result, bail};
use glob::{Paths, Pattern, glob};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazy sequence of directory entries produced by [`dir`].
pub struct DirEntries {
    paths: Option<Paths>,
}

impl DirEntries {
    const fn empty() -> Self {
        Self { paths: None }
    }
}

impl Iterator for DirEntries {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.paths.as_mut()?.find_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(path = %err.path().display(), error = %err.error(), "dir: skipping unreadable entry");
                None
            }
        })
    }
}

/// List the entries below `root`.
///
/// With `recursive == false` only the direct children are listed; otherwise the whole tree
/// is walked. Directories are listed as well as files. Entries are produced lazily while
/// the flow is traversed. Recursive listing follows symlinked directories, so a symlink
/// cycle below `root` is walked until the paths grow too long to resolve.
///
/// A root that does not exist, is not a directory, or cannot be expressed as UTF-8 yields
/// an empty flow rather than an error.
pub fn dir(root: impl AsRef<Path>, recursive: bool) -> DataFlow<DirEntries> {
    let root = root.as_ref();
    if !root.is_dir() {
        debug!(root = %root.display(), "dir: root is missing or not a directory");
        return DataFlow::new(DirEntries::empty());
    }
    let Some(root_str) = root.to_str() else {
        debug!(root = %root.display(), "dir: root is not valid UTF-8");
        return DataFlow::new(DirEntries::empty());
    };

    let base = PathBuf::from(Pattern::escape(root_str));
    let pattern = if recursive {
        base.join("**").join("*")
    } else {
        base.join("*")
    };
    let Some(pattern) = pattern.to_str() else {
        return DataFlow::new(DirEntries::empty());
    };

    match glob(pattern) {
        Ok(paths) => DataFlow::new(DirEntries { paths: Some(paths) }),
        Err(err) => {
            debug!(pattern, error = %err, "dir: invalid listing pattern");
            DataFlow::new(DirEntries::empty())
        }
    }
}

/// Expand a glob pattern into a flow of matching files, sorted lexicographically.
///
/// Only regular files are kept. Supports standard glob syntax: `*`, `?`, `**`, `[abc]`,
/// `[!abc]`.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is invalid
/// - There are I/O errors accessing the filesystem
///
/// No match is not an error; the flow is simply empty.
pub fn glob_files(pattern: &str) -> Result<OwnedFlow<PathBuf>> {
    let paths = glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;

    let mut result = Vec::new();
    for entry in paths {
        let path =
            entry.with_context(|| format!("error reading glob entry for pattern: {pattern}"))?;
        if path.is_file() {
            result.push(path);
        }
    }

    // Sort for deterministic order
    result.sort();
    debug!(pattern, files = result.len(), "glob_files");

    Ok(DataFlow::from_vec(result))
}

/// Like [`glob_files`], but zero matches is an error.
///
/// # Errors
///
/// Returns an error if the pattern is invalid, the filesystem cannot be read, or no file
/// matches.
pub fn glob_files_required(pattern: &str) -> Result<OwnedFlow<PathBuf>> {
    let files = glob_files(pattern)?;
    if files.len() == 0 {
        bail!("no files found matching pattern: {pattern}");
    }
    Ok(files)
}
