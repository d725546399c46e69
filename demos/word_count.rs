//! Word frequencies across the `.txt` files of a directory.
//!
//! Demonstrates:
//! - Listing a directory and filtering paths
//! - Opening and reading files, with unreadable files reported instead of aborting
//! - Tokenizing, normalizing and counting words
//! - Writing the report to stdout
//!
//! Run with: cargo run --example word_count -- <dir> [--recursive]
//! Set `RUST_LOG=pipeflow=debug` to see per-stage summaries.

use anyhow::{Result, bail};
use pipeflow::*;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DELIMITERS: &str = " \n\t\r,.!?;:\"";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(root) = args.next() else {
        bail!("usage: word_count <dir> [--recursive]");
    };
    let recursive = args.any(|a| a == "--recursive");

    let (unreadable, texts) = dir(&root, recursive)
        | filter(|p: &PathBuf| p.is_file() && p.extension().is_some_and(|e| e == "txt"))
        | open_files()
        | read_contents()
        | split_result();

    let mut stderr = io::stderr();
    let _ = (unreadable | transform(|e: io::Error| format!("skipped: {e}")) | out(&mut stderr))?;

    let mut stdout = io::stdout().lock();
    let _ = (texts
        | split(DELIMITERS)
        | transform(|word: String| word.to_lowercase())
        | filter(|word: &String| !word.is_empty())
        | aggregate_by_element(0usize, Count)
        | transform(|(word, count): (String, usize)| format!("{word} - {count}"))
        | out(&mut stdout))?;

    Ok(())
}
