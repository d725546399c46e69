//! Pipeline stages, one file per family.
//!
//! Lazy stages wrap the upstream iterator and compute elements on demand:
//! - [`filter`], [`transform`], [`drop_none`], [`key_by`], [`inspect`] / [`inspect_with`]
//! - [`split`] -- tokenizer over text records
//!
//! Eager stages drain the upstream flow once and return owning output:
//! - [`join_by`] / [`join`] -- left-outer joins
//! - [`aggregate_by_key`] / [`aggregate_by_element`] -- grouped folds
//! - [`split_result`] / [`split_result_with`] -- partition by fallibility
//! - [`as_vec`], [`write_to`], [`out`] -- materialization and sinks

mod aggregate;
mod joins;
mod lazy;
mod sinks;
mod split;
mod split_result;

pub use aggregate::{AggregateByElement, AggregateByKey, aggregate_by_element, aggregate_by_key};
pub use joins::{Join, JoinBy, join, join_by};
pub use lazy::{
    DropNone, Filter, Inspect, InspectWith, Inspected, KeyBy, Keyed, Transform, drop_none,
    filter, inspect, inspect_with, key_by, transform,
};
pub use sinks::{AsVec, WriteTo, as_vec, out, write_to};
pub use split::{Split, Tokens, split};
pub use split_result::{SplitResult, SplitResultWith, split_result, split_result_with};
