use fovea_types::{Column, ColumnData, Dtype, FoveaError, TimeSeriesTable};

use super::infer::{mean_step_ns, median_step_ns};

/// Downsample a table by averaging over a time window centered on each new
/// timestamp.
///
/// One output row is produced per new timestamp; its values are the
/// arithmetic mean of all source rows whose timestamp lies within the
/// inclusive window `[ts - window/2, ts + window/2]`, with missing source
/// values excluded from the mean. A window that captures no source rows
/// yields the missing marker, never zero. Every output column is a
/// continuous float column: integer columns average to floats, exactly as
/// their means do.
///
/// `window_size` (nanoseconds) defaults to the median spacing of the sorted
/// new timestamps; with fewer than two new timestamps there is no median
/// and an explicit window is required.
///
/// This operation only downsamples: the median spacing of `new_ts` must not
/// fall below the *mean* spacing of the source axis. The median-vs-mean
/// statistic pair is part of the contract. The check is skipped when either
/// axis has fewer than two entries, leaving no spacing to compare.
///
/// # Errors
/// Returns `Err(FoveaError::InvalidInput)` when the downsampling
/// precondition is violated, a text column is present, the window is not
/// positive, or no default window can be derived.
pub fn window_average(
    new_ts: &[i64],
    data: &TimeSeriesTable,
    window_size: Option<i64>,
) -> Result<TimeSeriesTable, FoveaError> {
    if let Some(col) = data.columns().iter().find(|c| c.dtype() == Dtype::Str) {
        return Err(FoveaError::invalid_input(format!(
            "cannot average non-numeric column `{}`",
            col.name()
        )));
    }
    let mut new_ts = new_ts.to_vec();
    new_ts.sort_unstable();

    let median_new = median_step_ns(&new_ts);
    if let (Some(m_new), Some(m_src)) = (median_new, mean_step_ns(data.timestamps())) {
        if m_new < m_src {
            return Err(FoveaError::invalid_input(
                "new timestamps must have a lower sampling frequency than the old data",
            ));
        }
    }
    let window = match window_size {
        Some(w) if w > 0 => w,
        Some(w) => {
            return Err(FoveaError::invalid_input(format!(
                "window size must be positive, got {w}"
            )));
        }
        None => median_new.map(|m| m as i64).ok_or_else(|| {
            FoveaError::invalid_input(
                "window size is required when fewer than two new timestamps are given",
            )
        })?,
    };

    // Two-pointer sweep: both bounds of the window advance monotonically
    // with the target timestamp. Comparisons stay in integer arithmetic
    // (2*(ts - t) against ±window) so half-window bounds are exact.
    let src_ts = data.timestamps();
    let mut ranges = Vec::with_capacity(new_ts.len());
    let mut lo = 0usize;
    let mut hi = 0usize;
    for &t in &new_ts {
        while lo < src_ts.len() && (i128::from(src_ts[lo]) - i128::from(t)) * 2 < -i128::from(window)
        {
            lo += 1;
        }
        if hi < lo {
            hi = lo;
        }
        while hi < src_ts.len() && (i128::from(src_ts[hi]) - i128::from(t)) * 2 <= i128::from(window)
        {
            hi += 1;
        }
        ranges.push((lo, hi));
    }

    let mut columns = Vec::with_capacity(data.columns().len());
    for col in data.columns() {
        let mut means = Vec::with_capacity(new_ts.len());
        match col.data() {
            ColumnData::Float(values) => {
                for &(lo, hi) in &ranges {
                    let mut sum = 0.0;
                    let mut count = 0usize;
                    for &v in &values[lo..hi] {
                        if !v.is_nan() {
                            sum += v;
                            count += 1;
                        }
                    }
                    means.push(if count == 0 { f64::NAN } else { sum / count as f64 });
                }
            }
            ColumnData::Int(values) => {
                for &(lo, hi) in &ranges {
                    let mut sum = 0.0;
                    let mut count = 0usize;
                    for v in values[lo..hi].iter().flatten() {
                        sum += *v as f64;
                        count += 1;
                    }
                    means.push(if count == 0 { f64::NAN } else { sum / count as f64 });
                }
            }
            ColumnData::Str(_) => {
                return Err(FoveaError::invalid_input(format!(
                    "cannot average non-numeric column `{}`",
                    col.name()
                )));
            }
        }
        columns.push(Column::float(col.name(), means));
    }
    TimeSeriesTable::new(new_ts, columns)
}
