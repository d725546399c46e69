//! The [`DataFlow`] sequence type and the `|` composition operator.
//!
//! A `DataFlow<I>` wraps any [`Iterator`] and is itself an iterator, so every stage of a
//! pipeline is a plain, statically typed iterator. Composition is done exclusively through
//! [`BitOr`]: `flow | adapter` is `adapter.apply(flow)`, and `a | f | g` is
//! `g.apply(f.apply(a))`. The full type of a pipeline is fixed when it is built and no stage
//! is dispatched dynamically.
//!
//! ## View and owning flows
//! - `as_data_flow(&vec)` borrows `vec`; the resulting flow (and every lazy stage chained
//!   on it) cannot outlive `vec`, and `vec` cannot be mutated while the flow is alive.
//! - `as_data_flow(vec)` takes ownership; the flow is independently valid.
//! - Every eager stage returns an [`OwnedFlow`] backed by freshly allocated storage.
//!
//! ## Example
//! ```
//! use pipeflow::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let evens_squared = as_data_flow(&numbers)
//!     | filter(|n: &&i32| **n % 2 == 0)
//!     | transform(|n: &i32| n * n)
//!     | as_vec();
//! assert_eq!(evens_squared, vec![4, 16]);
//! ```

use std::iter::FusedIterator;
use std::ops::BitOr;

/// A single-pass, forward-only sequence at the center of every pipeline.
#[derive(Clone, Debug)]
#[must_use = "flows are lazy and do nothing unless drained"]
pub struct DataFlow<I> {
    iter: I,
}

/// The flow type produced by every eager stage: it owns its elements.
pub type OwnedFlow<T> = DataFlow<std::vec::IntoIter<T>>;

impl<I> DataFlow<I> {
    /// Wrap an iterator without touching it.
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<T> DataFlow<std::vec::IntoIter<T>> {
    /// Build an owning flow over a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data.into_iter())
    }
}

/// Wrap a collection (or any iterable) into a [`DataFlow`].
///
/// Passing a reference produces a view flow bound to the collection's lifetime; passing an
/// owned value produces an owning flow.
///
/// ```
/// use pipeflow::*;
///
/// let words = vec!["a".to_string(), "b".to_string()];
/// {
///     let view = as_data_flow(&words) | as_vec(); // Vec<&String>
///     assert_eq!(view, vec![&words[0], &words[1]]);
/// }
///
/// let owned = as_data_flow(words) | as_vec(); // Vec<String>
/// assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn as_data_flow<C: IntoIterator>(source: C) -> DataFlow<C::IntoIter> {
    DataFlow::new(source.into_iter())
}

impl<I: Iterator> Iterator for DataFlow<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for DataFlow<I> {}

impl<I: FusedIterator> FusedIterator for DataFlow<I> {}

/// A configured pipeline stage.
///
/// An adapter captures only its own parameters (a predicate, a key selector, a sink...) and
/// consumes the flow it is applied to. Whether a stage is lazy or eager is visible in its
/// `Output` type: lazy stages return a `DataFlow` wrapping the upstream iterator, eager
/// stages return an [`OwnedFlow`] (or a pair of them, or a plain collection).
///
/// Implementing `Adapter` for your own type makes it usable with `|`:
///
/// ```
/// use pipeflow::*;
///
/// struct Doubled;
///
/// impl<I: Iterator<Item = i32>> Adapter<DataFlow<I>> for Doubled {
///     type Output = OwnedFlow<i32>;
///
///     fn apply(self, input: DataFlow<I>) -> Self::Output {
///         DataFlow::from_vec(input.flat_map(|x| [x, x]).collect())
///     }
/// }
///
/// let out = as_data_flow(vec![1, 2]) | Doubled | as_vec();
/// assert_eq!(out, vec![1, 1, 2, 2]);
/// ```
pub trait Adapter<In> {
    /// What applying this stage produces.
    type Output;

    /// Apply the stage to `input`.
    fn apply(self, input: In) -> Self::Output;
}

impl<I, A> BitOr<A> for DataFlow<I>
where
    A: Adapter<DataFlow<I>>,
{
    type Output = A::Output;

    #[inline]
    fn bitor(self, adapter: A) -> Self::Output {
        adapter.apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl<I: Iterator> Adapter<DataFlow<I>> for Identity {
        type Output = DataFlow<I>;

        fn apply(self, input: DataFlow<I>) -> Self::Output {
            input
        }
    }

    #[test]
    fn pipe_is_application() {
        let piped: Vec<_> = (as_data_flow(vec![1, 2, 3]) | Identity).collect();
        let applied: Vec<_> = Identity.apply(as_data_flow(vec![1, 2, 3])).collect();
        assert_eq!(piped, applied);
    }

    #[test]
    fn size_hint_passes_through() {
        let flow = as_data_flow(vec![1, 2, 3]);
        assert_eq!(flow.len(), 3);
        assert_eq!(flow.size_hint(), (3, Some(3)));
    }

    #[test]
    fn into_inner_returns_remaining_elements() {
        let mut flow = DataFlow::from_vec(vec!['a', 'b', 'c']);
        assert_eq!(flow.next(), Some('a'));
        let rest: String = flow.into_inner().collect();
        assert_eq!(rest, "bc");
    }
}
