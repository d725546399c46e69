//! Testing utilities for pipelines.
//!
//! Helpers for writing tests against pipelines built with `|`:
//!
//! - **Assertions**: compare drained flows and stage outputs with expected results
//! - **Builders**: assemble input collections and key/value inputs fluently
//! - **Fixtures**: sample records plus [`TempTree`], a throwaway directory tree for the
//!   filesystem collaborators
//!
//! # Quick Start
//!
//! ```
//! use pipeflow::*;
//! use pipeflow::testing::*;
//!
//! let input = TestDataBuilder::<i32>::new().add_range(1..=5).build();
//! let doubled = as_data_flow(input) | transform(|x: i32| x * 2);
//! assert_flow_yields(doubled, &[2, 4, 6, 8, 10]);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact, order-dependent comparison
//! - [`assert_flow_yields`]: drain a flow and compare in order
//! - [`assert_collections_unordered_equal`]: multiset comparison
//! - [`assert_kv_collections_equal`]: compare key/value pairs after sorting by key
//! - [`assert_first_occurrence_order`]: grouped rows follow the order keys first appeared
//! - [`assert_left_outer`]: every base element is present, in base order
//! - [`assert_all`] / [`assert_none`]: predicates over a collection
//!
//! # Filesystem fixtures
//!
//! ```
//! use pipeflow::testing::TempTree;
//!
//! let tree = TempTree::new()?
//!     .file("a.txt", "alpha")?
//!     .file("nested/b.txt", "beta")?
//!     .dir("empty")?;
//! assert!(tree.path().join("nested/b.txt").is_file());
//! # anyhow::Result::<()>::Ok(())
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
