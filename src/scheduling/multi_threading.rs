//! Multi-threaded back-end of the row conversions

use crate::scheduling::ROW_BATCH_SIZE;

use rayon::prelude::*;

/// Convert rows in parallel on rayon's global thread pool
///
/// Rows are split into tasks of at least `ROW_BATCH_SIZE` elements. rayon's
/// indexed collection writes each result at the position of its input row,
/// so the output order does not depend on task scheduling.
///
pub fn map_rows_impl<I, O>(
    rows: &[I],
    convert_row: impl Send + Sync + Fn(&I) -> O,
) -> Vec<O>
where
    I: Sync,
    O: Send,
{
    rows.par_iter()
        .with_min_len(ROW_BATCH_SIZE)
        .map(convert_row)
        .collect()
}
