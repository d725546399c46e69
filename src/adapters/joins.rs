//! Left-outer joins.
//!
//! Both forms follow the same plan:
//! 1) drain the right flow once into a `HashMap<K, Vec<R>>` index,
//! 2) drain the left flow once, looking up each left key in the index,
//! 3) emit one [`JoinResult`] per match, or a single unmatched row when there is none.
//!
//! Every left element therefore appears at least once. Output groups follow left order;
//! inside a group, matches follow the order in which the right flow produced them. The
//! hash map is only ever probed, never iterated, so its internal order never leaks into
//! the output. Expected cost is `O(L + R)`.
//!
//! ## Available forms
//! - [`join_by`] -- arbitrary element types, keys derived by selector functions
//! - [`join`] -- key/value records ([`KV`](crate::KV) or `(K, V)`) on both sides with the
//!   same key type; rows carry the values only
//!
//! ```
//! use pipeflow::*;
//!
//! let left = vec![KV::new(0, "a"), KV::new(1, "b"), KV::new(2, "c")];
//! let right = vec![KV::new(0, "f"), KV::new(1, "g")];
//!
//! let rows = as_data_flow(left) | join(as_data_flow(right)) | as_vec();
//! assert_eq!(
//!     rows,
//!     vec![
//!         JoinResult::new("a", "f"),
//!         JoinResult::new("b", "g"),
//!         JoinResult::unmatched("c"),
//!     ]
//! );
//! ```

use crate::flow::{Adapter, DataFlow, OwnedFlow};
use crate::records::{IntoKv, JoinResult};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Key-selector join. See [`join_by`].
#[derive(Clone, Debug)]
pub struct JoinBy<R, FL, FR> {
    right: R,
    left_key: FL,
    right_key: FR,
}

/// Left-outer join against `right`, matching `left_key(l) == right_key(r)`.
///
/// Rows are `JoinResult<L, R>` where `L` and `R` are the element types of the two flows.
///
/// ```
/// use pipeflow::*;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Employee { dept: u32, name: &'static str }
/// #[derive(Clone, Debug, PartialEq)]
/// struct Dept { id: u32, name: &'static str }
///
/// let emps = vec![Employee { dept: 1, name: "Alice" }, Employee { dept: 3, name: "Carol" }];
/// let depts = vec![Dept { id: 1, name: "HR" }];
///
/// let rows = as_data_flow(emps)
///     | join_by(as_data_flow(depts), |e: &Employee| e.dept, |d: &Dept| d.id)
///     | as_vec();
///
/// assert_eq!(rows[0].joined.as_ref().map(|d| d.name), Some("HR"));
/// assert!(!rows[1].is_matched());
/// ```
pub const fn join_by<R, FL, FR>(right: R, left_key: FL, right_key: FR) -> JoinBy<R, FL, FR> {
    JoinBy {
        right,
        left_key,
        right_key,
    }
}

/// Key/value join. See [`join`].
#[derive(Clone, Debug)]
pub struct Join<R> {
    right: R,
}

/// Left-outer join of two key/value flows sharing the same key type.
///
/// Accepts [`KV`](crate::KV) records and `(K, V)` tuples, owned or borrowed (borrowed
/// records are cloned). A mismatch between the two key types is a compile error.
pub const fn join<R>(right: R) -> Join<R> {
    Join { right }
}

/// Build the multi-valued right-side index, keeping per-key production order.
fn index_right<K, R>(rows: impl Iterator<Item = (K, R)>) -> (HashMap<K, Vec<R>>, usize)
where
    K: Eq + Hash,
{
    let mut index: HashMap<K, Vec<R>> = HashMap::new();
    let mut count = 0usize;
    for (k, r) in rows {
        index.entry(k).or_default().push(r);
        count += 1;
    }
    (index, count)
}

/// Probe the index with every left row in order.
fn left_outer<K, B, R>(
    left: impl Iterator<Item = (K, B)>,
    index: &HashMap<K, Vec<R>>,
) -> Vec<JoinResult<B, R>>
where
    K: Eq + Hash,
    B: Clone,
    R: Clone,
{
    let mut out = Vec::with_capacity(left.size_hint().0);
    for (key, base) in left {
        match index.get(&key).map(Vec::as_slice) {
            None | Some([]) => out.push(JoinResult::unmatched(base)),
            Some([init @ .., last]) => {
                for r in init {
                    out.push(JoinResult::new(base.clone(), r.clone()));
                }
                out.push(JoinResult::new(base, last.clone()));
            }
        }
    }
    out
}

fn finish<B, R>(
    rows: Vec<JoinResult<B, R>>,
    right_rows: usize,
    right_keys: usize,
) -> OwnedFlow<JoinResult<B, R>> {
    let unmatched = rows.iter().filter(|r| !r.is_matched()).count();
    debug!(
        right_rows,
        right_keys,
        output_rows = rows.len(),
        unmatched,
        "join"
    );
    DataFlow::from_vec(rows)
}

impl<I, R, K, FL, FR> Adapter<DataFlow<I>> for JoinBy<R, FL, FR>
where
    I: Iterator,
    I::Item: Clone,
    R: IntoIterator,
    R::Item: Clone,
    K: Eq + Hash,
    FL: FnMut(&I::Item) -> K,
    FR: FnMut(&R::Item) -> K,
{
    type Output = OwnedFlow<JoinResult<I::Item, R::Item>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        let Self {
            right,
            mut left_key,
            mut right_key,
        } = self;
        let (index, right_rows) = index_right(right.into_iter().map(|r| (right_key(&r), r)));
        let rows = left_outer(input.map(|l| (left_key(&l), l)), &index);
        finish(rows, right_rows, index.len())
    }
}

impl<I, R, K, V, W> Adapter<DataFlow<I>> for Join<R>
where
    I: Iterator,
    I::Item: IntoKv<Key = K, Value = V>,
    R: IntoIterator,
    R::Item: IntoKv<Key = K, Value = W>,
    K: Eq + Hash,
    V: Clone,
    W: Clone,
{
    type Output = OwnedFlow<JoinResult<V, W>>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        let (index, right_rows) = index_right(self.right.into_iter().map(IntoKv::into_kv));
        let rows = left_outer(input.map(IntoKv::into_kv), &index);
        finish(rows, right_rows, index.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_keeps_right_order_per_key() {
        let (index, n) = index_right(vec![(1, 'a'), (2, 'b'), (1, 'c')].into_iter());
        assert_eq!(n, 3);
        assert_eq!(index[&1], vec!['a', 'c']);
        assert_eq!(index[&2], vec!['b']);
    }

    #[test]
    fn left_outer_fans_out_multiple_matches() {
        let (index, _) = index_right(vec![(1, "x"), (1, "y")].into_iter());
        let rows = left_outer(vec![(1, 'L'), (2, 'M')].into_iter(), &index);
        assert_eq!(
            rows,
            vec![
                JoinResult::new('L', "x"),
                JoinResult::new('L', "y"),
                JoinResult::unmatched('M'),
            ]
        );
    }
}
