//! Assertion functions for testing pipeline outputs.

use crate::flow::DataFlow;
use crate::records::JoinResult;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Drain `flow` and assert it yields exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the drained elements differ from `expected`.
///
/// # Example
///
/// ```
/// use pipeflow::*;
/// use pipeflow::testing::assert_flow_yields;
///
/// let evens = as_data_flow(vec![1, 2, 3, 4]) | filter(|x: &i32| x % 2 == 0);
/// assert_flow_yields(evens, &[2, 4]);
/// ```
pub fn assert_flow_yields<I>(flow: DataFlow<I>, expected: &[I::Item])
where
    I: Iterator,
    I::Item: Debug + PartialEq,
{
    let actual: Vec<I::Item> = flow.collect();
    assert_collections_equal(&actual, expected);
}

/// Assert that two collections hold the same elements with the same multiplicities,
/// ignoring order.
///
/// # Panics
///
/// Panics if some element occurs a different number of times in the two collections.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 1, 2], &[1, 2, 3, 1]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_counts = multiplicities(actual);
    let expected_counts = multiplicities(expected);
    if actual_counts != expected_counts {
        let missing: Vec<_> = expected_counts
            .iter()
            .filter(|(item, n)| actual_counts.get(*item).copied().unwrap_or(0) < **n)
            .map(|(item, _)| *item)
            .collect();
        let extra: Vec<_> = actual_counts
            .iter()
            .filter(|(item, n)| expected_counts.get(*item).copied().unwrap_or(0) < **n)
            .map(|(item, _)| *item)
            .collect();

        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

fn multiplicities<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Assert that two collections of key/value pairs are equal after sorting by key.
///
/// # Panics
///
/// Panics if the collections differ after sorting by key.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_kv_collections_equal;
///
/// assert_kv_collections_equal(vec![("b", 2), ("a", 1)], vec![("a", 1), ("b", 2)]);
/// ```
pub fn assert_kv_collections_equal<K, V>(mut actual: Vec<(K, V)>, mut expected: Vec<(K, V)>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));
    assert_collections_equal(&actual, &expected);
}

/// Assert that grouped rows appear in the order their keys first occur in `input_keys`.
///
/// `rows` is the output of a grouped stage such as
/// [`aggregate_by_key`](crate::aggregate_by_key); `input_keys` is the key of every input
/// element, in input order.
///
/// # Panics
///
/// Panics if a key is repeated in `rows`, or if the row keys are not exactly the distinct
/// input keys in first-occurrence order.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_first_occurrence_order;
///
/// let rows = vec![("b", 2), ("a", 1)];
/// assert_first_occurrence_order(&rows, &["b", "a", "b"]);
/// ```
pub fn assert_first_occurrence_order<K, A>(rows: &[(K, A)], input_keys: &[K])
where
    K: Debug + Eq + Hash,
{
    let mut seen = HashSet::new();
    let expected: Vec<&K> = input_keys.iter().filter(|k| seen.insert(*k)).collect();
    let actual: Vec<&K> = rows.iter().map(|(k, _)| k).collect();

    let distinct: HashSet<&K> = actual.iter().copied().collect();
    assert_eq!(
        distinct.len(),
        actual.len(),
        "Grouped output repeats a key:\n  Keys: {actual:?}"
    );
    assert_eq!(
        actual, expected,
        "Grouped output is not in first-occurrence order:\n  Expected keys: {expected:?}\n  Actual keys: {actual:?}"
    );
}

/// Assert that join rows are a left-outer join over `base`: every base element appears at
/// least once, rows follow base order, and an unmatched base element has exactly one row.
///
/// Runs of equal base elements are compared as runs, since their rows are
/// indistinguishable.
///
/// # Panics
///
/// Panics if a base element is missing, rows are out of base order, or an unmatched base
/// element is repeated.
///
/// # Example
///
/// ```
/// use pipeflow::JoinResult;
/// use pipeflow::testing::assert_left_outer;
///
/// let rows = vec![
///     JoinResult::new("a", 1),
///     JoinResult::new("a", 2),
///     JoinResult::unmatched("b"),
/// ];
/// assert_left_outer(&rows, &["a", "b"]);
/// ```
pub fn assert_left_outer<B, J>(rows: &[JoinResult<B, J>], base: &[B])
where
    B: Debug + PartialEq,
    J: Debug,
{
    let base_runs = runs(base.iter());
    let row_runs = runs(rows.iter().map(|r| &r.base));
    let expected: Vec<&B> = base_runs.iter().map(|(b, _)| *b).collect();
    let actual: Vec<&B> = row_runs.iter().map(|(b, _)| *b).collect();
    assert_eq!(
        actual, expected,
        "Join rows do not follow base order:\n  Expected bases: {expected:?}\n  Actual bases: {actual:?}"
    );

    let mut start = 0usize;
    for ((b, wanted), (_, got)) in base_runs.iter().zip(&row_runs) {
        let group = &rows[start..start + got];
        assert!(
            got >= wanted,
            "Base element {b:?} occurs {wanted} time(s) but has only {got} row(s)"
        );
        if group.iter().any(|r| !r.is_matched()) {
            assert!(
                got == wanted && group.iter().all(|r| !r.is_matched()),
                "Unmatched base element {b:?} must have exactly one row per occurrence:\n  Group: {group:?}"
            );
        }
        start += got;
    }
}

/// Collapse consecutive equal elements into `(element, run length)`.
fn runs<'a, T: PartialEq + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<(&'a T, usize)> {
    let mut out: Vec<(&T, usize)> = Vec::new();
    for item in items {
        match out.last_mut() {
            Some((last, n)) if *last == item => *n += 1,
            _ => out.push((item, 1)),
        }
    }
    out
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no element in a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
///
/// # Example
///
/// ```
/// use pipeflow::testing::assert_none;
///
/// assert_none(&[1, 3, 5, 7], |x| x % 2 == 0);
/// ```
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}
