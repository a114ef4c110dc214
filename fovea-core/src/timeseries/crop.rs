use fovea_types::{FoveaError, TimeRange, TimeSeriesTable};

/// Crop a table to an inclusive time range.
///
/// Bounds are either absolute nanosecond timestamps or relative times in
/// seconds; a bound left as `None` defaults to the table's observed
/// minimum/maximum on that side, i.e. no cropping on that side. Surviving
/// rows keep their stored relative-time values. The source is not mutated.
///
/// Tables reaching this function already uphold the monotonic-timestamp
/// invariant; a non-monotonic input cannot be constructed.
///
/// # Errors
/// Returns `Err(FoveaError::InvalidInput)` when both bounds are omitted.
///
/// ```
/// use fovea_core::{crop, Column, TimeRange, TimeSeriesTable};
///
/// let data = TimeSeriesTable::new(
///     vec![0, 1_000_000_000, 2_000_000_000, 3_000_000_000],
///     vec![Column::float("x", vec![0.0, 1.0, 2.0, 3.0])],
/// )?;
/// let mid = crop(&data, &TimeRange::seconds(Some(1.0), Some(2.0)))?;
/// assert_eq!(mid.timestamps(), &[1_000_000_000, 2_000_000_000]);
/// # Ok::<(), fovea_core::FoveaError>(())
/// ```
pub fn crop(data: &TimeSeriesTable, range: &TimeRange) -> Result<TimeSeriesTable, FoveaError> {
    if range.is_unbounded() {
        return Err(FoveaError::invalid_input(
            "at least one of tmin or tmax must be provided",
        ));
    }
    let keep: Vec<usize> = match *range {
        TimeRange::Timestamps { min, max } => {
            let ts = data.timestamps();
            let lo = min.unwrap_or(i64::MIN);
            let hi = max.unwrap_or(i64::MAX);
            (0..data.len()).filter(|&i| ts[i] >= lo && ts[i] <= hi).collect()
        }
        TimeRange::Seconds { min, max } => {
            let t = data.times();
            let lo = min.unwrap_or(f64::NEG_INFINITY);
            let hi = max.unwrap_or(f64::INFINITY);
            (0..data.len()).filter(|&i| t[i] >= lo && t[i] <= hi).collect()
        }
    };
    Ok(data.take_rows(&keep))
}
