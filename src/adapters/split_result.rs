//! Partitioning by fallibility.
//!
//! Per-element failures are ordinary data (`Result<T, E>`). These stages drain the upstream
//! flow once and route every element to one of two owning flows, returned as
//! `(failures, successes)`. Each output keeps its own relative order; how the two were
//! interleaved upstream is not recoverable from the outputs.

use crate::flow::{Adapter, DataFlow, OwnedFlow};
use tracing::debug;

/// Partition a flow of `Result`s. See [`split_result`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitResult;

/// Split a flow of `Result<T, E>` into `(failures: E, successes: T)`.
///
/// Applying it to a flow whose elements are not `Result`s does not compile.
///
/// ```
/// use pipeflow::*;
///
/// let input: Vec<Result<i32, &str>> = vec![Ok(1), Err("x"), Ok(2)];
/// let (errors, values) = as_data_flow(input) | split_result();
/// assert_eq!(values | as_vec(), vec![1, 2]);
/// assert_eq!(errors | as_vec(), vec!["x"]);
/// ```
pub const fn split_result() -> SplitResult {
    SplitResult
}

/// Apply a fallible function, then partition. See [`split_result_with`].
#[derive(Clone, Copy, Debug)]
pub struct SplitResultWith<F> {
    func: F,
}

/// Apply `func` to every element and split the `Result`s into `(failures, successes)`.
///
/// `func` must return a `Result`; anything else does not compile.
///
/// ```
/// use pipeflow::*;
///
/// let (bad, good) = as_data_flow(vec!["1", "two", "3"])
///     | split_result_with(|s: &str| s.parse::<u32>());
/// assert_eq!(good | as_vec(), vec![1, 3]);
/// assert_eq!((bad | as_vec()).len(), 1);
/// ```
pub const fn split_result_with<F>(func: F) -> SplitResultWith<F> {
    SplitResultWith { func }
}

fn partition<T, E>(results: impl Iterator<Item = Result<T, E>>) -> (OwnedFlow<E>, OwnedFlow<T>) {
    let mut failures = Vec::new();
    let mut successes = Vec::new();
    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err(error) => failures.push(error),
        }
    }
    debug!(
        failures = failures.len(),
        successes = successes.len(),
        "split_result"
    );
    (DataFlow::from_vec(failures), DataFlow::from_vec(successes))
}

impl<I, T, E> Adapter<DataFlow<I>> for SplitResult
where
    I: Iterator<Item = Result<T, E>>,
{
    type Output = (OwnedFlow<E>, OwnedFlow<T>);

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        partition(input)
    }
}

impl<I, F, T, E> Adapter<DataFlow<I>> for SplitResultWith<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<T, E>,
{
    type Output = (OwnedFlow<E>, OwnedFlow<T>);

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        partition(input.map(self.func))
    }
}
