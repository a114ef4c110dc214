//! Cadence estimation over raw nanosecond timestamp axes.

/// Estimate a representative step (in nanoseconds) from positive adjacent
/// deltas in the input axis.
///
/// Prefer the mode (most frequent positive delta); if there is no unique
/// mode, return the lower median so the estimate is an actually observed
/// cadence. Duplicate timestamps are ignored. Returns `None` with fewer
/// than two distinct timestamps.
///
/// ```
/// use fovea_core::estimate_step_ns;
///
/// // Adjacent deltas: 5, 5, 5, 10, 15 ms => unique mode is 5 ms
/// let ts: Vec<i64> = [0, 5, 10, 15, 25, 40].iter().map(|&ms| ms * 1_000_000).collect();
/// assert_eq!(estimate_step_ns(&ts), Some(5_000_000));
///
/// // Adjacent deltas: 5, 5, 10, 10 ms => no unique mode, lower median is 5 ms
/// let ts: Vec<i64> = [0, 5, 10, 20, 30].iter().map(|&ms| ms * 1_000_000).collect();
/// assert_eq!(estimate_step_ns(&ts), Some(5_000_000));
/// ```
#[must_use]
pub fn estimate_step_ns(timestamps: &[i64]) -> Option<i64> {
    if timestamps.len() < 2 {
        return None;
    }
    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let mut deltas: Vec<i64> = Vec::with_capacity(sorted.len() - 1);
    let mut last = sorted[0];
    for &cur in sorted.iter().skip(1) {
        if cur > last {
            deltas.push(cur - last);
            last = cur;
        }
    }
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta = deltas[0];
    let mut best_count = 0usize;
    let mut num_best_candidates = 0usize;

    let mut cur_delta = deltas[0];
    let mut cur_count = 1usize;
    for &d in deltas.iter().skip(1) {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates += 1;
        }
        cur_delta = d;
        cur_count = 1;
    }
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates += 1;
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    // Lower median
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}

/// Median adjacent spacing of a non-decreasing axis, in nanoseconds.
///
/// Unlike [`estimate_step_ns`] this keeps zero deltas (duplicate
/// timestamps) and averages the two middle deltas for even counts, matching
/// the statistic the window-average precondition is defined over. Returns
/// `None` with fewer than two timestamps.
#[must_use]
pub fn median_step_ns(timestamps: &[i64]) -> Option<f64> {
    if timestamps.len() < 2 {
        return None;
    }
    let mut deltas: Vec<i64> = timestamps.windows(2).map(|w| w[1] - w[0]).collect();
    deltas.sort_unstable();
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid] as f64)
    } else {
        Some((deltas[mid - 1] as f64 + deltas[mid] as f64) / 2.0)
    }
}

/// Mean adjacent spacing of a non-decreasing axis, in nanoseconds.
///
/// Returns `None` with fewer than two timestamps.
#[must_use]
pub fn mean_step_ns(timestamps: &[i64]) -> Option<f64> {
    let n = timestamps.len();
    if n < 2 {
        return None;
    }
    Some((timestamps[n - 1] - timestamps[0]) as f64 / (n - 1) as f64)
}
