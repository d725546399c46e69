//! Aggregators for [`aggregate_by_key`](crate::aggregate_by_key) and
//! [`aggregate_by_element`](crate::aggregate_by_element).
//!
//! An [`Aggregator<T, A>`] folds one element of type `T` into an accumulator of type `A`
//! in place. Any `FnMut(&mut A, T)` closure is an aggregator; the built-ins below cover
//! the usual cases:
//!
//! - [`Count`] -- number of elements (`usize` or `u64` accumulator).
//! - [`Sum`] -- sum of elements (accumulator of the element type).
//! - [`Min`] / [`Max`] -- smallest / largest element (`Option<T>` accumulator).
//! - [`Collect`] -- every element, in upstream order (`Vec<T>` accumulator).
//!
//! # Examples
//! ```
//! use pipeflow::*;
//!
//! let words = vec!["a", "b", "a"];
//!
//! let counts = as_data_flow(words.clone()) | aggregate_by_element(0usize, Count) | as_vec();
//! assert_eq!(counts, vec![("a", 2), ("b", 1)]);
//!
//! let lengths = as_data_flow(words)
//!     | aggregate_by_key(0usize, |acc: &mut usize, w: &str| *acc += w.len(), |w: &&'static str| *w)
//!     | as_vec();
//! assert_eq!(lengths, vec![("a", 2), ("b", 1)]);
//! ```

mod basic;
mod extrema;

pub use basic::{Collect, Count, Sum};
pub use extrema::{Max, Min};

/// Folds elements of type `T` into an accumulator of type `A`.
pub trait Aggregator<T, A> {
    /// Fold `value` into `acc`.
    fn add_input(&mut self, acc: &mut A, value: T);
}

impl<T, A, F> Aggregator<T, A> for F
where
    F: FnMut(&mut A, T),
{
    fn add_input(&mut self, acc: &mut A, value: T) {
        self(acc, value);
    }
}
