//! Basic aggregators: Count, Sum, Collect

use super::Aggregator;
use std::mem::take;
use std::ops::Add;

/* ===================== Count ===================== */

/// Number of elements per key.
///
/// - Accumulator: `usize` or `u64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<T> Aggregator<T, usize> for Count {
    fn add_input(&mut self, acc: &mut usize, _value: T) {
        *acc += 1;
    }
}

impl<T> Aggregator<T, u64> for Count {
    fn add_input(&mut self, acc: &mut u64, _value: T) {
        *acc += 1;
    }
}

/* ===================== Sum ===================== */

/// Sum of elements per key.
///
/// - Accumulator: the element type `T` (or `T` itself when elements are `&T`)
///
/// Requires `T: Add<Output = T> + Default`; the initial accumulator is usually
/// `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl<T> Aggregator<T, T> for Sum
where
    T: Add<Output = T> + Default,
{
    fn add_input(&mut self, acc: &mut T, value: T) {
        *acc = take(acc) + value;
    }
}

impl<'a, T> Aggregator<&'a T, T> for Sum
where
    T: Add<Output = T> + Default + Copy,
{
    fn add_input(&mut self, acc: &mut T, value: &'a T) {
        *acc = take(acc) + *value;
    }
}

/* ===================== Collect ===================== */

/// Every element per key, in upstream order.
///
/// - Accumulator: `Vec<T>`
///
/// With an empty initial vector this turns `aggregate_by_key` into a group-by-key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Collect;

impl<T> Aggregator<T, Vec<T>> for Collect {
    fn add_input(&mut self, acc: &mut Vec<T>, value: T) {
        acc.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<T, A, G: Aggregator<T, A>>(mut agg: G, init: A, items: Vec<T>) -> A {
        let mut acc = init;
        for item in items {
            agg.add_input(&mut acc, item);
        }
        acc
    }

    #[test]
    fn count_ignores_values() {
        assert_eq!(fold(Count, 0usize, vec!["x", "y", "z"]), 3);
        assert_eq!(fold(Count, 10u64, vec![(), ()]), 12);
    }

    #[test]
    fn sum_owned_and_borrowed() {
        assert_eq!(fold(Sum, 0i64, vec![1, 2, 3]), 6);
        let values = [1.5f64, 2.5];
        assert_eq!(fold(Sum, 0.0f64, values.iter().collect::<Vec<&f64>>()), 4.0);
    }

    #[test]
    fn collect_preserves_order() {
        assert_eq!(fold(Collect, Vec::new(), vec![3, 1, 2]), vec![3, 1, 2]);
    }
}
