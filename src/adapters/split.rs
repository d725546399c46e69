//! Tokenizer over text records.
//!
//! Every upstream element is treated as one record. Tokens are flattened across records:
//! the record is scanned for any character from the delimiter set; the text before a match
//! is emitted and scanning resumes after the delimiter. When a record has no delimiter left,
//! its remainder is emitted and the next record is pulled. Adjacent delimiters, a leading or
//! trailing delimiter and an empty record all yield empty tokens.
//!
//! Whether a record still has tokens is tracked explicitly (`current` is `Some` exactly while
//! the record has unread text or a pending final token); exhaustion is never inferred from
//! comparing positions.

use crate::flow::{Adapter, DataFlow};
use std::iter::FusedIterator;

/// Split text records on a set of delimiter characters. See [`split`].
#[derive(Clone, Debug)]
pub struct Split {
    delimiters: Vec<char>,
}

/// Split each upstream record on any character of `delimiters`.
///
/// ```
/// use pipeflow::*;
///
/// let tokens = as_data_flow(vec!["a,b", "c"]) | split(",") | as_vec();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
///
/// let tokens = as_data_flow(vec!["a,,b"]) | split(",") | as_vec();
/// assert_eq!(tokens, vec!["a", "", "b"]);
/// ```
pub fn split(delimiters: &str) -> Split {
    Split {
        delimiters: delimiters.chars().collect(),
    }
}

/// Iterator produced by [`split`].
#[derive(Clone, Debug)]
pub struct Tokens<I> {
    records: I,
    delimiters: Vec<char>,
    /// The record being tokenized and the byte offset of its unread text.
    current: Option<(String, usize)>,
}

impl<I> Tokens<I> {
    fn new(records: I, delimiters: Vec<char>) -> Self {
        Self {
            records,
            delimiters,
            current: None,
        }
    }
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some((record, pos)) = self.current.as_mut() {
                let rest = &record[*pos..];
                let found = rest
                    .char_indices()
                    .find(|(_, c)| self.delimiters.contains(c));
                return match found {
                    Some((at, delimiter)) => {
                        let token = rest[..at].to_owned();
                        *pos += at + delimiter.len_utf8();
                        Some(token)
                    }
                    None => {
                        let token = rest.to_owned();
                        self.current = None;
                        Some(token)
                    }
                };
            }
            let record = self.records.next()?;
            self.current = Some((record.as_ref().to_owned(), 0));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.current.is_some());
        let (records, _) = self.records.size_hint();
        (records.saturating_add(pending), None)
    }
}

impl<I> FusedIterator for Tokens<I>
where
    I: FusedIterator,
    I::Item: AsRef<str>,
{
}

impl<I> Adapter<DataFlow<I>> for Split
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Output = DataFlow<Tokens<I>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(Tokens::new(input.into_inner(), self.delimiters))
    }
}
