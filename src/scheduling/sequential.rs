//! Sequential back-end of the row conversions

/// Convert rows one after another on the calling thread
pub fn map_rows_impl<I, O>(rows: &[I], convert_row: impl Fn(&I) -> O) -> Vec<O> {
    rows.iter().map(convert_row).collect()
}
