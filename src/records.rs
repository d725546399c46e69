//! Record types used by the relational stages.
//!
//! - [`KV`] is an explicit key/value record for key/value joins.
//! - [`JoinResult`] is what every join emits: a base-side element and, when a match exists,
//!   the joined-side element.
//! - [`IntoKv`] abstracts over "things that split into a key and a value", so key/value
//!   joins accept `KV<K, V>` as well as `(K, V)` tuples, owned or borrowed.

use serde::{Deserialize, Serialize};

/// An explicit key/value record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KV<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KV<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for KV<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// One row of a left-outer join.
///
/// `joined` is `None` when the base element had no match on the joined side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JoinResult<B, J> {
    pub base: B,
    pub joined: Option<J>,
}

impl<B, J> JoinResult<B, J> {
    /// A matched row.
    pub const fn new(base: B, joined: J) -> Self {
        Self {
            base,
            joined: Some(joined),
        }
    }

    /// A row whose base element found no match.
    pub const fn unmatched(base: B) -> Self {
        Self { base, joined: None }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.joined.is_some()
    }
}

/// A record that can be split into a key and a value.
///
/// Borrowed records clone their parts so that joins over view flows still produce owned
/// rows.
pub trait IntoKv {
    type Key;
    type Value;

    fn into_kv(self) -> (Self::Key, Self::Value);
}

impl<K, V> IntoKv for KV<K, V> {
    type Key = K;
    type Value = V;

    fn into_kv(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone> IntoKv for &KV<K, V> {
    type Key = K;
    type Value = V;

    fn into_kv(self) -> (K, V) {
        (self.key.clone(), self.value.clone())
    }
}

impl<K, V> IntoKv for (K, V) {
    type Key = K;
    type Value = V;

    fn into_kv(self) -> (K, V) {
        self
    }
}

impl<K: Clone, V: Clone> IntoKv for &(K, V) {
    type Key = K;
    type Value = V;

    fn into_kv(self) -> (K, V) {
        (self.0.clone(), self.1.clone())
    }
}
