use fovea_types::{
    Column, ColumnData, ContinuousInterp, DiscreteInterp, FoveaError, InterpClass, TimeSeriesTable,
};

/// Resample a table onto an arbitrary set of new timestamps.
///
/// `new_ts` is sorted ascending before use, regardless of input order;
/// duplicates are kept. The output has one row per new timestamp, with the
/// relative-time column recomputed as `(ts - ts[0]) / 1e9`.
///
/// Each column is resampled according to its interpolation-class tag:
/// continuous columns use `float_kind`, discrete columns use `other_kind`.
/// A target timestamp that exactly matches a source timestamp returns the
/// stored value unchanged. Targets outside the source's covered range
/// produce the column's typed missing marker; bounds are never
/// extrapolated. Output dtype and class match the source column exactly.
///
/// Tables reaching this function already uphold the monotonic-timestamp
/// invariant; a non-monotonic source cannot be constructed. This is a pure
/// function and may be invoked concurrently for independent tables.
///
/// # Errors
/// Propagates `Err(FoveaError::InvalidInput)` from output-table
/// construction; with a valid source this does not occur.
///
/// ```
/// use fovea_core::{interpolate, Column, ContinuousInterp, DiscreteInterp, TimeSeriesTable};
///
/// let data = TimeSeriesTable::new(
///     vec![0, 10, 20],
///     vec![Column::float("x", vec![0.0, 1.0, 2.0])],
/// )?;
/// let out = interpolate(
///     &[15, 5],
///     &data,
///     ContinuousInterp::Linear,
///     DiscreteInterp::Nearest,
/// )?;
/// assert_eq!(out.timestamps(), &[5, 15]);
/// # Ok::<(), fovea_core::FoveaError>(())
/// ```
pub fn interpolate(
    new_ts: &[i64],
    data: &TimeSeriesTable,
    float_kind: ContinuousInterp,
    other_kind: DiscreteInterp,
) -> Result<TimeSeriesTable, FoveaError> {
    let mut new_ts = new_ts.to_vec();
    new_ts.sort_unstable();

    let src_ts = data.timestamps();
    // Discrete sampling depends only on the two axes, so the source-row
    // choice is computed once and shared by every discrete column.
    let picks = discrete_picks(&new_ts, src_ts, other_kind);

    let mut columns = Vec::with_capacity(data.columns().len());
    for col in data.columns() {
        let resampled = match col.data() {
            ColumnData::Float(values) if col.class() == InterpClass::Continuous => {
                ColumnData::Float(resample_continuous(&new_ts, src_ts, values, float_kind))
            }
            ColumnData::Float(values) => ColumnData::Float(
                picks
                    .iter()
                    .map(|p| p.map_or(f64::NAN, |i| values[i]))
                    .collect(),
            ),
            ColumnData::Int(values) => {
                ColumnData::Int(picks.iter().map(|p| p.and_then(|i| values[i])).collect())
            }
            ColumnData::Str(values) => ColumnData::Str(
                picks
                    .iter()
                    .map(|p| p.and_then(|i| values[i].clone()))
                    .collect(),
            ),
        };
        columns.push(Column::new(col.name(), col.class(), resampled)?);
    }
    TimeSeriesTable::new(new_ts, columns)
}

/// Single pass over both sorted axes. `j` tracks the last source index at
/// or before the current target.
fn resample_continuous(
    new_ts: &[i64],
    src_ts: &[i64],
    values: &[f64],
    kind: ContinuousInterp,
) -> Vec<f64> {
    let n = src_ts.len();
    let mut out = Vec::with_capacity(new_ts.len());
    if n == 0 {
        out.resize(new_ts.len(), f64::NAN);
        return out;
    }
    let mut j = 0usize;
    for &t in new_ts {
        if t < src_ts[0] || t > src_ts[n - 1] {
            out.push(f64::NAN);
            continue;
        }
        while j + 1 < n && src_ts[j + 1] <= t {
            j += 1;
        }
        if src_ts[j] == t {
            out.push(values[j]);
            continue;
        }
        // src_ts[j] < t < src_ts[j + 1]
        let (t0, t1) = (src_ts[j], src_ts[j + 1]);
        let v = match kind {
            ContinuousInterp::Linear => {
                let frac = (t - t0) as f64 / (t1 - t0) as f64;
                values[j] + (values[j + 1] - values[j]) * frac
            }
            ContinuousInterp::Nearest => {
                if t - t0 <= t1 - t {
                    values[j]
                } else {
                    values[j + 1]
                }
            }
        };
        out.push(v);
    }
    out
}

fn discrete_picks(new_ts: &[i64], src_ts: &[i64], kind: DiscreteInterp) -> Vec<Option<usize>> {
    let n = src_ts.len();
    let mut out = Vec::with_capacity(new_ts.len());
    if n == 0 {
        out.resize(new_ts.len(), None);
        return out;
    }
    let mut j = 0usize;
    for &t in new_ts {
        if t < src_ts[0] || t > src_ts[n - 1] {
            out.push(None);
            continue;
        }
        while j + 1 < n && src_ts[j + 1] <= t {
            j += 1;
        }
        let pick = if src_ts[j] == t {
            j
        } else {
            // src_ts[j] < t < src_ts[j + 1]
            match kind {
                DiscreteInterp::Previous => j,
                DiscreteInterp::Next => j + 1,
                DiscreteInterp::Nearest => {
                    if t - src_ts[j] <= src_ts[j + 1] - t {
                        j
                    } else {
                        j + 1
                    }
                }
            }
        };
        out.push(Some(pick));
    }
    out
}
