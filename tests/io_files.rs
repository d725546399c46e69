use anyhow::Result;
use pipeflow::testing::*;
use pipeflow::*;
use std::io::{BufRead, ErrorKind, Read};
use std::path::PathBuf;

fn text_tree() -> Result<TempTree> {
    TempTree::new()?
        .file("file1.txt", "content1")?
        .file("file2.txt", "content2\nsecond line")
}

#[test]
fn opens_existing_files() -> Result<()> {
    let tree = text_tree()?;
    let paths = vec![tree.path().join("file1.txt"), tree.path().join("file2.txt")];

    let files = as_data_flow(&paths) | open_files() | as_vec();
    assert_eq!(files.len(), 2);
    assert_all(&files, OpenedFile::is_open);
    assert_eq!(files[0].path(), paths[0].as_path());
    Ok(())
}

#[test]
fn reads_file_contents_line_by_line() -> Result<()> {
    let tree = text_tree()?;
    let paths = vec![tree.path().join("file2.txt")];

    let mut first_lines = Vec::new();
    for mut file in as_data_flow(paths) | open_files() {
        let mut line = String::new();
        file.read_line(&mut line)?;
        first_lines.push(line);
    }
    assert_eq!(first_lines, vec!["content2\n"]);
    Ok(())
}

#[test]
fn read_contents_turns_handles_into_strings() -> Result<()> {
    let tree = text_tree()?;
    let paths = vec![
        tree.path().join("file1.txt"),
        tree.path().join("missing.txt"),
        tree.path().join("file2.txt"),
    ];

    let (failures, contents) = as_data_flow(paths) | open_files() | read_contents() | split_result();

    assert_eq!(contents | as_vec(), vec!["content1", "content2\nsecond line"]);
    let kinds: Vec<ErrorKind> = failures.map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![ErrorKind::NotFound]);
    Ok(())
}

#[test]
fn empty_input_produces_no_handles() {
    let paths: Vec<PathBuf> = Vec::new();
    assert_eq!((as_data_flow(paths) | open_files()).count(), 0);
}

#[test]
fn nonexistent_file_is_kept_as_a_closed_handle() {
    let files = as_data_flow(vec!["nonexistent_file.txt"]) | open_files() | as_vec();

    assert_eq!(files.len(), 1);
    assert_none(&files, OpenedFile::is_open);
}

#[test]
fn reading_a_closed_handle_fails_with_not_found() {
    let mut file = OpenedFile::open("nonexistent_file.txt");
    let mut buf = [0u8; 4];
    let err = file.read(&mut buf).err().map(|e| e.kind());
    assert_eq!(err, Some(ErrorKind::NotFound));
    assert!(file.read_contents().is_err());
}

#[test]
fn buffered_read_of_a_closed_handle_fails_with_not_found() {
    let mut file = OpenedFile::open("nonexistent_file.txt");
    let err = file.fill_buf().err().map(|e| e.kind());
    assert_eq!(err, Some(ErrorKind::NotFound));

    let mut line = String::new();
    let err = file.read_line(&mut line).err().map(|e| e.kind());
    assert_eq!(err, Some(ErrorKind::NotFound));
    assert!(line.is_empty());
}

#[test]
fn opened_file_reads_whole_contents() -> Result<()> {
    let tree = text_tree()?;
    let mut file = OpenedFile::open(tree.path().join("file1.txt"));
    assert_eq!(file.read_contents()?, "content1");
    Ok(())
}

#[cfg(feature = "fs")]
#[test]
fn listing_then_opening_text_files() -> Result<()> {
    let tree = text_tree()?.file("notes.md", "# skip")?;

    let (failures, texts) = dir(tree.path(), false)
        | filter(|p: &PathBuf| p.extension().is_some_and(|e| e == "txt"))
        | open_files()
        | read_contents()
        | split_result();

    assert_eq!(failures.count(), 0);
    let mut texts = texts | as_vec();
    texts.sort();
    assert_eq!(texts, vec!["content1", "content2\nsecond line"]);
    Ok(())
}
