//! This module takes care of scheduling element-wise conversion work,
//! encapsulating use of multiple threads
//!
//! Every conversion in this library is a pure function of one input row, so
//! rows can be processed in any order and on any thread. Results are always
//! collected back in input order.

#[cfg(feature = "multi-threading")]
mod multi_threading;
#[cfg(not(feature = "multi-threading"))]
mod sequential;

/// Minimal number of rows handled by a single task
///
/// Each row involves a handful of arbitrary-precision operations, which is
/// cheap but not free. Below this amount of work per task, the scheduling
/// overhead of a thread pool would dominate.
///
/// This constant may need to be tuned in the future if CPUs become faster or
/// synchronization overhead changes.
///
#[cfg_attr(not(feature = "multi-threading"), allow(dead_code))]
const ROW_BATCH_SIZE: usize = 64;

/// Apply a row conversion to every input row, in the manner that was
/// configured at build time, preserving the order of rows
pub fn map_rows<I, O>(rows: &[I], convert_row: impl Send + Sync + Fn(&I) -> O) -> Vec<O>
where
    I: Sync,
    O: Send,
{
    log::trace!("Scheduling {} rows", rows.len());

    // ...in sequential mode
    #[cfg(not(feature = "multi-threading"))]
    {
        sequential::map_rows_impl(rows, convert_row)
    }

    // ...in multi-threaded mode
    #[cfg(feature = "multi-threading")]
    {
        multi_threading::map_rows_impl(rows, convert_row)
    }
}
