//! Grouped folds.
//!
//! [`aggregate_by_key`] drains the upstream flow once. The first time a key is seen its
//! accumulator is seeded with a clone of the initial value and the key is appended to a
//! first-occurrence list; every element (including that first one) is then folded into its
//! key's accumulator in upstream order. Output walks the first-occurrence list, so rows come
//! out in the order keys first appeared, whatever order the hash map keeps internally.
//!
//! The accumulator map lives only for the duration of one `apply` call.

use crate::aggregators::Aggregator;
use crate::flow::{Adapter, DataFlow, OwnedFlow};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use tracing::debug;

/// Grouped fold with a key selector. See [`aggregate_by_key`].
#[derive(Clone, Debug)]
pub struct AggregateByKey<A, G, F> {
    initial: A,
    aggregator: G,
    key: F,
}

/// Fold elements per `key(element)`, starting each group from a clone of `initial`.
///
/// Emits one `(key, accumulator)` row per distinct key, in first-occurrence order.
///
/// ```
/// use pipeflow::*;
///
/// let sales = vec![("north", 10), ("south", 5), ("north", 7)];
/// let totals = as_data_flow(sales)
///     | aggregate_by_key(
///         0,
///         |acc: &mut i32, (_, amount): (&str, i32)| *acc += amount,
///         |(region, _): &(&'static str, i32)| *region,
///     )
///     | as_vec();
/// assert_eq!(totals, vec![("north", 17), ("south", 5)]);
/// ```
pub const fn aggregate_by_key<A, G, F>(initial: A, aggregator: G, key: F) -> AggregateByKey<A, G, F> {
    AggregateByKey {
        initial,
        aggregator,
        key,
    }
}

/// Grouped fold where each element is its own key. See [`aggregate_by_element`].
#[derive(Clone, Debug)]
pub struct AggregateByElement<A, G> {
    initial: A,
    aggregator: G,
}

/// Fold equal elements together; the key is a clone of the element itself.
///
/// ```
/// use pipeflow::*;
///
/// let words = vec!["a", "b", "c", "d", "a", "a", "b", "d"];
/// let counts = as_data_flow(words) | aggregate_by_element(0usize, Count) | as_vec();
/// assert_eq!(counts, vec![("a", 3), ("b", 2), ("c", 1), ("d", 2)]);
/// ```
pub const fn aggregate_by_element<A, G>(initial: A, aggregator: G) -> AggregateByElement<A, G> {
    AggregateByElement {
        initial,
        aggregator,
    }
}

/// Fold `(key, element)` rows and return accumulators in first-occurrence key order.
fn fold_by_key<K, T, A, G>(
    rows: impl Iterator<Item = (K, T)>,
    initial: &A,
    aggregator: &mut G,
) -> Vec<(K, A)>
where
    K: Eq + Hash + Clone,
    A: Clone,
    G: Aggregator<T, A>,
{
    let mut accumulators: HashMap<K, A> = HashMap::new();
    let mut first_seen: Vec<K> = Vec::new();
    let mut input_rows = 0usize;

    for (key, item) in rows {
        let acc = match accumulators.entry(key) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                first_seen.push(slot.key().clone());
                slot.insert(initial.clone())
            }
        };
        aggregator.add_input(acc, item);
        input_rows += 1;
    }

    let out: Vec<(K, A)> = first_seen
        .into_iter()
        .filter_map(|key| accumulators.remove(&key).map(|acc| (key, acc)))
        .collect();
    debug!(input_rows, groups = out.len(), "aggregate_by_key");
    out
}

impl<I, A, G, F, K> Adapter<DataFlow<I>> for AggregateByKey<A, G, F>
where
    I: Iterator,
    A: Clone,
    G: Aggregator<I::Item, A>,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash + Clone,
{
    type Output = OwnedFlow<(K, A)>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        let Self {
            initial,
            mut aggregator,
            mut key,
        } = self;
        let rows = input.map(|item| (key(&item), item));
        DataFlow::from_vec(fold_by_key(rows, &initial, &mut aggregator))
    }
}

impl<I, A, G> Adapter<DataFlow<I>> for AggregateByElement<A, G>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
    A: Clone,
    G: Aggregator<I::Item, A>,
{
    type Output = OwnedFlow<(I::Item, A)>;

    fn apply(mut self, input: DataFlow<I>) -> Self::Output {
        let rows = input.map(|item| (item.clone(), item));
        DataFlow::from_vec(fold_by_key(rows, &self.initial, &mut self.aggregator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::Count;

    #[test]
    fn output_order_is_first_occurrence_not_hash_order() {
        // Enough distinct keys that hash order would almost surely differ from input order.
        let keys: Vec<u32> = (0..200).rev().collect();
        let rows = keys.iter().map(|k| (*k, ()));
        let out = fold_by_key(rows, &0usize, &mut Count);
        let got: Vec<u32> = out.iter().map(|(k, _)| *k).collect();
        assert_eq!(got, keys);
    }

    #[test]
    fn each_group_starts_from_a_fresh_initial_value() {
        let rows = vec![("a", 1), ("b", 2), ("a", 3)].into_iter();
        let out = fold_by_key(rows, &vec![0], &mut |acc: &mut Vec<i32>, v: i32| acc.push(v));
        assert_eq!(out, vec![("a", vec![0, 1, 3]), ("b", vec![0, 2])]);
    }
}
