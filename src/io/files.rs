//! Opening and reading files inside a pipeline.

use crate::flow::{Adapter, DataFlow, OwnedFlow};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An input handle produced by [`open_files`].
///
/// A path that could not be opened still produces a handle, in a "not open" state:
/// [`is_open`](Self::is_open) is `false` and every read fails with
/// [`io::ErrorKind::NotFound`].
#[derive(Debug)]
pub struct OpenedFile {
    path: PathBuf,
    reader: Option<BufReader<File>>,
}

impl OpenedFile {
    /// Try to open `path` for reading; failure is recorded, not returned.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let reader = match File::open(&path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "open_files: cannot open");
                None
            }
        };
        Self { path, reader }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Read the rest of the file into a `String`.
    ///
    /// # Errors
    /// Returns an error if the handle is not open, or if reading fails or the content is
    /// not UTF-8.
    pub fn read_contents(&mut self) -> Result<String> {
        let Some(reader) = self.reader.as_mut() else {
            bail!("{} is not open", self.path.display());
        };
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .with_context(|| format!("read {}", self.path.display()))?;
        Ok(contents)
    }
}

fn not_open(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} is not open", path.display()),
    )
}

impl Read for OpenedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.reader {
            Some(reader) => reader.read(buf),
            None => Err(not_open(&self.path)),
        }
    }
}

impl BufRead for OpenedFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match &mut self.reader {
            Some(reader) => reader.fill_buf(),
            None => Err(not_open(&self.path)),
        }
    }

    fn consume(&mut self, amt: usize) {
        if let Some(reader) = self.reader.as_mut() {
            reader.consume(amt);
        }
    }
}

/* ===================== OpenFiles ===================== */

/// Open every path of the flow. See [`open_files`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenFiles;

/// Turn a flow of paths into a flow of [`OpenedFile`] handles, one per path, in order.
///
/// Eager: every file is opened before the stage returns. Paths that cannot be opened are
/// kept as "not open" handles instead of being dropped or failing the pipeline.
pub const fn open_files() -> OpenFiles {
    OpenFiles
}

impl<I> Adapter<DataFlow<I>> for OpenFiles
where
    I: Iterator,
    I::Item: AsRef<Path>,
{
    type Output = OwnedFlow<OpenedFile>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        let files: Vec<OpenedFile> = input
            .map(|path| OpenedFile::open(path.as_ref()))
            .collect();
        let not_open = files.iter().filter(|f| !f.is_open()).count();
        debug!(files = files.len(), not_open, "open_files");
        DataFlow::from_vec(files)
    }
}

/* ===================== ReadContents ===================== */

/// Read every reader of the flow to a string. See [`read_contents`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadContents;

/// Read each upstream reader to the end, yielding `io::Result<String>` per element.
///
/// Lazy: a reader is consumed only when its element is pulled. Failures stay in the flow
/// as `Err` values, ready for [`split_result`](crate::split_result).
///
/// ```
/// use pipeflow::*;
/// use std::io::Cursor;
///
/// let (errors, texts) = as_data_flow(vec![Cursor::new("a b"), Cursor::new("c")])
///     | read_contents()
///     | split_result();
/// assert_eq!(texts | as_vec(), vec!["a b", "c"]);
/// assert_eq!(errors.count(), 0);
/// ```
pub const fn read_contents() -> ReadContents {
    ReadContents
}

/// Iterator produced by [`read_contents`].
#[derive(Debug)]
pub struct Contents<I> {
    readers: I,
}

impl<I> Iterator for Contents<I>
where
    I: Iterator,
    I::Item: Read,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut reader = self.readers.next()?;
        let mut contents = String::new();
        Some(reader.read_to_string(&mut contents).map(|_| contents))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.readers.size_hint()
    }
}

impl<I> Adapter<DataFlow<I>> for ReadContents
where
    I: Iterator,
    I::Item: Read,
{
    type Output = DataFlow<Contents<I>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(Contents {
            readers: input.into_inner(),
        })
    }
}
