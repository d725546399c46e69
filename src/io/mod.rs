//! Filesystem collaborators.
//!
//! These sit at the edges of a pipeline and absorb platform failures into observable
//! states instead of erroring:
//!
//! - [`dir`] -- lazy listing of a directory (optionally recursive); a missing root is an
//!   empty flow. Requires the `fs` feature.
//! - [`glob_files`] -- sorted files matching a glob pattern. Requires the `fs` feature.
//! - [`open_files`] -- one [`OpenedFile`] per path, in order; unopenable paths yield a
//!   handle that reports `is_open() == false`.
//! - [`read_contents`] -- read each reader to a `String`, as per-element `io::Result`s.

#[cfg(feature = "fs")]
pub mod dir;
pub mod files;

#[cfg(feature = "fs")]
pub use dir::{DirEntries, dir, glob_files, glob_files_required};
pub use files::{Contents, OpenFiles, OpenedFile, ReadContents, open_files, read_contents};
