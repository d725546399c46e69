//! Element-wise lazy stages.
//!
//! None of these stages touch the upstream flow until the result is traversed, and each
//! upstream element is pulled at most once. Closures passed to them usually need their
//! parameter type spelled out (`|x: &i32| ...`) so they are generic over the borrow.

use crate::flow::{Adapter, DataFlow};
use std::fmt::Debug;
use std::iter::{Flatten, FusedIterator};
use tracing::trace;

/* ===================== Filter ===================== */

/// Keep only the elements matching a predicate. See [`filter`].
#[derive(Clone, Copy, Debug)]
pub struct Filter<P> {
    pred: P,
}

/// Keep the elements for which `pred` returns `true`, in their original order.
///
/// The predicate runs once per candidate element, during traversal only.
///
/// ```
/// use pipeflow::*;
///
/// let out = as_data_flow(vec![1, 2, 3, 4]) | filter(|x: &i32| x % 2 == 1) | as_vec();
/// assert_eq!(out, vec![1, 3]);
/// ```
pub const fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

impl<I, P> Adapter<DataFlow<I>> for Filter<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = DataFlow<std::iter::Filter<I, P>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(input.into_inner().filter(self.pred))
    }
}

/* ===================== Transform ===================== */

/// Map every element through a function. See [`transform`].
#[derive(Clone, Copy, Debug)]
pub struct Transform<F> {
    func: F,
}

/// Yield `func(element)` for every upstream element.
///
/// Results are computed when the element is pulled and never cached.
///
/// ```
/// use pipeflow::*;
///
/// let out = as_data_flow(vec!["a", "bb"]) | transform(|s: &str| s.len()) | as_vec();
/// assert_eq!(out, vec![1, 2]);
/// ```
pub const fn transform<F>(func: F) -> Transform<F> {
    Transform { func }
}

impl<I, F, O> Adapter<DataFlow<I>> for Transform<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> O,
{
    type Output = DataFlow<std::iter::Map<I, F>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(input.into_inner().map(self.func))
    }
}

/* ===================== DropNone ===================== */

/// Unwrap `Some` values and skip `None`s. See [`drop_none`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DropNone;

/// Drop absent values from a flow of `Option<T>` and unwrap the rest.
///
/// Only applicable when the upstream element type is an `Option`; anything else fails to
/// compile.
///
/// ```
/// use pipeflow::*;
///
/// let out = as_data_flow(vec![Some(1), None, Some(3)]) | drop_none() | as_vec();
/// assert_eq!(out, vec![1, 3]);
/// ```
pub const fn drop_none() -> DropNone {
    DropNone
}

impl<I, T> Adapter<DataFlow<I>> for DropNone
where
    I: Iterator<Item = Option<T>>,
{
    type Output = DataFlow<Flatten<I>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(input.into_inner().flatten())
    }
}

/* ===================== KeyBy ===================== */

/// Pair every element with a derived key. See [`key_by`].
#[derive(Clone, Copy, Debug)]
pub struct KeyBy<F> {
    key: F,
}

/// Turn `T` into `(key(&T), T)`, ready for [`join`](crate::join) or keyed aggregation.
///
/// ```
/// use pipeflow::*;
///
/// let out = as_data_flow(vec!["apple", "bob"]) | key_by(|s: &&str| s.len()) | as_vec();
/// assert_eq!(out, vec![(5, "apple"), (3, "bob")]);
/// ```
pub const fn key_by<F>(key: F) -> KeyBy<F> {
    KeyBy { key }
}

/// Iterator produced by [`key_by`].
#[derive(Clone, Debug)]
pub struct Keyed<I, F> {
    iter: I,
    key: F,
}

impl<I, F, K> Iterator for Keyed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(((self.key)(&item), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, K> FusedIterator for Keyed<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
{
}

impl<I, F, K> Adapter<DataFlow<I>> for KeyBy<F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    type Output = DataFlow<Keyed<I, F>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(Keyed {
            iter: input.into_inner(),
            key: self.key,
        })
    }
}

/* ===================== Inspect ===================== */

/// Pass-through stage that traces every element. See [`inspect`].
#[derive(Clone, Debug)]
pub struct Inspect {
    label: String,
}

/// Pass-through stage that traces every element and calls a hook. See [`inspect_with`].
#[derive(Clone, Debug)]
pub struct InspectWith<F> {
    label: String,
    hook: F,
}

/// Emit a `TRACE` event for every element flowing past this point.
///
/// Elements are forwarded unchanged. Events carry the label, the element index and the
/// element's `Debug` form; nothing is printed unless a `tracing` subscriber is installed.
pub fn inspect(label: impl Into<String>) -> Inspect {
    Inspect {
        label: label.into(),
    }
}

/// Like [`inspect`], additionally calling `hook` with a reference to each element.
///
/// ```
/// use pipeflow::*;
///
/// let mut seen = Vec::new();
/// let out = as_data_flow(vec![1, 2])
///     | inspect_with("numbers", |x: &i32| seen.push(*x))
///     | as_vec();
/// assert_eq!(out, vec![1, 2]);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn inspect_with<F>(label: impl Into<String>, hook: F) -> InspectWith<F> {
    InspectWith {
        label: label.into(),
        hook,
    }
}

/// Iterator produced by [`inspect`] and [`inspect_with`].
#[derive(Clone, Debug)]
pub struct Inspected<I, F> {
    iter: I,
    label: String,
    hook: F,
    index: usize,
}

impl<I, F> Iterator for Inspected<I, F>
where
    I: Iterator,
    I::Item: Debug,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        trace!(stage = %self.label, index = self.index, item = ?item, "inspect");
        (self.hook)(&item);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

fn ignore<T>(_: &T) {}

impl<I> Adapter<DataFlow<I>> for Inspect
where
    I: Iterator,
    I::Item: Debug,
{
    type Output = DataFlow<Inspected<I, fn(&I::Item)>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(Inspected {
            iter: input.into_inner(),
            label: self.label,
            hook: ignore::<I::Item>,
            index: 0,
        })
    }
}

impl<I, F> Adapter<DataFlow<I>> for InspectWith<F>
where
    I: Iterator,
    I::Item: Debug,
    F: FnMut(&I::Item),
{
    type Output = DataFlow<Inspected<I, F>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        DataFlow::new(Inspected {
            iter: input.into_inner(),
            label: self.label,
            hook: self.hook,
            index: 0,
        })
    }
}
