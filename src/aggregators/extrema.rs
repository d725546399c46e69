//! Ordering aggregators: Min, Max

use super::Aggregator;

/* ===================== Min<T> ===================== */

/// Minimum element per key (requires `Ord`).
///
/// - Accumulator: `Option<T>`, start from `None`
///
/// Ties keep the earliest element.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl<T: Ord> Aggregator<T, Option<T>> for Min {
    fn add_input(&mut self, acc: &mut Option<T>, value: T) {
        match acc {
            Some(cur) => {
                if value < *cur {
                    *cur = value;
                }
            }
            None => *acc = Some(value),
        }
    }
}

/* ===================== Max<T> ===================== */

/// Maximum element per key (requires `Ord`).
///
/// - Accumulator: `Option<T>`, start from `None`
///
/// Ties keep the earliest element.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Ord> Aggregator<T, Option<T>> for Max {
    fn add_input(&mut self, acc: &mut Option<T>, value: T) {
        match acc {
            Some(cur) => {
                if value > *cur {
                    *cur = value;
                }
            }
            None => *acc = Some(value),
        }
    }
}
