//! Terminal stages: materialization and textual sinks.

use crate::flow::{Adapter, DataFlow};
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/* ===================== AsVec ===================== */

/// Materialize a flow into a `Vec`. See [`as_vec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AsVec;

/// Drain the flow into a new `Vec`, preserving order.
///
/// Materializing a view flow yields a `Vec` of references; materializing an owning flow
/// yields owned elements.
pub const fn as_vec() -> AsVec {
    AsVec
}

impl<I: Iterator> Adapter<DataFlow<I>> for AsVec {
    type Output = Vec<I::Item>;

    fn apply(self, input: DataFlow<I>) -> Self::Output {
        let out: Vec<I::Item> = input.collect();
        debug!(rows = out.len(), "as_vec");
        out
    }
}

/* ===================== WriteTo / out ===================== */

/// Write every element to a sink. See [`write_to`] and [`out`].
#[derive(Debug)]
pub struct WriteTo<'w, W: ?Sized> {
    sink: &'w mut W,
    separator: String,
}

/// Write each element's `Display` form to `sink`, each one followed by `separator`.
///
/// The separator also follows the last element; an empty flow writes nothing. The stage
/// returns the drained flow so the chain can continue, but that flow yields nothing more.
///
/// # Errors
/// Returns an error if writing to or flushing the sink fails; elements already written stay
/// written.
///
/// ```
/// use pipeflow::*;
///
/// let mut buf = Vec::new();
/// let _ = (as_data_flow(vec![1, 2, 3]) | write_to(&mut buf, '|'))?;
/// assert_eq!(String::from_utf8(buf)?, "1|2|3|");
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn write_to<W: Write + ?Sized>(sink: &mut W, separator: impl Into<String>) -> WriteTo<'_, W> {
    WriteTo {
        sink,
        separator: separator.into(),
    }
}

/// Write one element per line to `sink`. Same as `write_to(sink, '\n')`.
pub fn out<W: Write + ?Sized>(sink: &mut W) -> WriteTo<'_, W> {
    write_to(sink, '\n')
}

impl<I, W> Adapter<DataFlow<I>> for WriteTo<'_, W>
where
    I: Iterator,
    I::Item: Display,
    W: Write + ?Sized,
{
    type Output = Result<DataFlow<I>>;

    fn apply(self, mut input: DataFlow<I>) -> Self::Output {
        let mut written = 0usize;
        for item in input.by_ref() {
            write!(self.sink, "{item}{}", self.separator)
                .with_context(|| format!("failed to write element #{written}"))?;
            written += 1;
        }
        self.sink.flush().context("failed to flush sink")?;
        debug!(written, "write_to");
        Ok(input)
    }
}
