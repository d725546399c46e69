//! Test data builders for creating pipeline inputs fluently.

use crate::flow::{DataFlow, OwnedFlow};
use crate::records::KV;
use std::ops::RangeInclusive;

/// A fluent builder for pipeline input.
///
/// # Example
///
/// ```
/// use pipeflow::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::<i32>::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16); // 10 + 1 + 5
/// ```
#[derive(Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Add `count` copies of `value`.
    ///
    /// ```
    /// use pipeflow::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::new().add_repeated("x", 3).build();
    /// assert_eq!(data, vec!["x", "x", "x"]);
    /// ```
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Finish building and wrap the data in an owning flow.
    pub fn into_flow(self) -> OwnedFlow<T> {
        DataFlow::from_vec(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Add every integer of `range`, converted to `T`.
    ///
    /// ```
    /// use pipeflow::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::<i64>::new().add_range(1..=5).build();
    /// assert_eq!(data, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}

/// Builder for key/value inputs of [`join`](crate::join).
///
/// # Example
///
/// ```
/// use pipeflow::*;
/// use pipeflow::testing::KvDataBuilder;
///
/// let left = KvDataBuilder::new()
///     .add_kv(1, "a")
///     .add_key_with_values(2, ["b", "c"])
///     .into_flow();
/// let right = KvDataBuilder::new().add_kv(2, 'x').build();
///
/// let rows = left | join(as_data_flow(right)) | as_vec();
/// assert_eq!(rows.len(), 3);
/// assert!(!rows[0].is_matched());
/// ```
#[derive(Debug, Default)]
pub struct KvDataBuilder<K, V> {
    data: Vec<KV<K, V>>,
}

impl<K, V> KvDataBuilder<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_kv(mut self, key: K, value: V) -> Self {
        self.data.push(KV::new(key, value));
        self
    }

    /// Add one record per value, all under `key`.
    #[must_use]
    pub fn add_key_with_values(mut self, key: K, values: impl IntoIterator<Item = V>) -> Self
    where
        K: Clone,
    {
        self.data
            .extend(values.into_iter().map(|value| KV::new(key.clone(), value)));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<KV<K, V>> {
        self.data
    }

    pub fn into_flow(self) -> OwnedFlow<KV<K, V>> {
        DataFlow::from_vec(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `count` lines of the form `"{prefix} {i}"`, numbered from 1.
///
/// ```
/// use pipeflow::testing::numbered_lines;
///
/// assert_eq!(numbered_lines("row", 2), vec!["row 1", "row 2"]);
/// ```
#[must_use]
pub fn numbered_lines(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix} {i}")).collect()
}
