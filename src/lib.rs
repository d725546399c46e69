//! # Pipeflow
//!
//! A small **pipeline composition library**: build data-processing pipelines by chaining
//! stages with the `|` operator, the way a shell chains commands.
//!
//! ```
//! use pipeflow::*;
//!
//! let words = vec!["a", "b", "c", "d", "a", "a", "b", "d"];
//! let mut report = Vec::new();
//! let _ = (as_data_flow(words)
//!     | aggregate_by_element(0usize, Count)
//!     | transform(|(word, n): (&str, usize)| format!("{word}={n}"))
//!     | write_to(&mut report, ' '))?;
//! assert_eq!(String::from_utf8(report)?, "a=3 b=2 c=1 d=2 ");
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Key Features
//!
//! - **Statically typed composition** - every pipeline is a concrete iterator type; nothing
//!   is boxed or dispatched dynamically
//! - **Lazy element-wise stages** - filter, transform, split, drop_none, key_by, inspect
//! - **Eager relational stages** - left-outer joins, grouped aggregation, result partitioning
//! - **Views or ownership** - wrap a borrowed collection to process it in place, or hand
//!   the collection over
//! - **Filesystem collaborators** - directory listing, glob expansion, opening and reading
//!   files, with failures surfaced as data
//!
//! ## Core Concepts
//!
//! ### DataFlow
//!
//! A [`DataFlow<I>`] wraps an iterator and is itself an iterator. Create one with
//! [`as_data_flow`] (from a reference for a view, from an owned value for an owning flow),
//! or from a collaborator such as [`dir`] (feature `fs`).
//!
//! ### Adapters
//!
//! An [`Adapter`] is a configured stage. `flow | adapter` applies it; the result type
//! tells you what you got back:
//!
//! | Kind | Stages | Result |
//! |------|--------|--------|
//! | lazy | [`filter`], [`transform`], [`split`], [`drop_none`], [`key_by`], [`inspect`], [`read_contents`] | a `DataFlow` over the upstream iterator |
//! | eager | [`join`], [`join_by`], [`aggregate_by_key`], [`aggregate_by_element`], [`open_files`] | an [`OwnedFlow`] |
//! | partition | [`split_result`], [`split_result_with`] | `(failures, successes)` owning flows |
//! | terminal | [`as_vec`], [`write_to`], [`out`] | a `Vec`, or the drained flow |
//!
//! A lazy stage does no work until an element is pulled. An eager stage drains its
//! upstream completely when applied.
//!
//! ### Records
//!
//! - [`KV`] - an explicit key/value record
//! - [`JoinResult`] - one row of a left-outer join, with `joined: Option<_>`
//!
//! ### Aggregators
//!
//! Grouped stages fold elements into per-key accumulators through the [`Aggregator`]
//! trait. Any `FnMut(&mut A, T)` closure is an aggregator; [`Count`], [`Sum`], [`Min`],
//! [`Max`] and [`Collect`] cover the common folds.
//!
//! ## Error handling
//!
//! Per-element failures are values: a stage may produce `Result<T, E>` elements, and
//! [`split_result`] routes them to two flows. Errors of the pipeline machinery itself
//! (writing to a sink, an invalid glob pattern) are returned as [`anyhow::Result`].
//! Collaborators never abort a pipeline for a missing directory or an unreadable file; a
//! missing directory is an empty flow and an unopenable file is an [`OpenedFile`] that
//! reports `is_open() == false`.
//!
//! ## Logging
//!
//! Every eager stage emits one `tracing` event at `DEBUG` level summarizing its work
//! (rows in, rows out, groups, unmatched rows). [`inspect`] emits a `TRACE` event per
//! element. Install any `tracing` subscriber to see them.
//!
//! ## Feature Flags
//!
//! - `fs` (default) - [`dir`], [`glob_files`] and [`glob_files_required`]
//!
//! ## Module Overview
//!
//! - [`flow`] - `DataFlow`, `Adapter` and the `|` operator
//! - [`adapters`] - every built-in stage
//! - [`aggregators`] - the `Aggregator` trait and built-in folds
//! - [`records`] - `KV`, `JoinResult` and the `IntoKv` abstraction
//! - [`io`] - filesystem collaborators
//! - [`testing`] - assertions, builders and fixtures for pipeline tests

pub mod adapters;
pub mod aggregators;
pub mod flow;
pub mod io;
pub mod records;
pub mod testing;

pub use adapters::*;
pub use aggregators::{Aggregator, Collect, Count, Max, Min, Sum};
pub use flow::{Adapter, DataFlow, OwnedFlow, as_data_flow};
pub use io::*;
pub use records::{IntoKv, JoinResult, KV};
