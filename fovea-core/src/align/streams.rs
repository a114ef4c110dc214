use serde::{Deserialize, Serialize};

use fovea_types::{
    Column, ContinuousInterp, DiscreteInterp, FoveaError, SamplingFreq, StreamKind, TimeSeriesTable,
};

use crate::recording::Recording;

/// Configuration for [`concat_streams`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamAlignConfig {
    /// Target sampling frequency policy for the common timeline.
    pub sampling_freq: SamplingFreq,
    /// Interpolation applied to continuous (float) columns.
    pub float_kind: ContinuousInterp,
    /// Interpolation applied to discrete columns.
    pub other_kind: DiscreteInterp,
    /// Replace each selected stream's cached data with its resampled table
    /// during concatenation. Off by default; turning it on invalidates any
    /// concurrently held view of the selected streams.
    pub replace: bool,
}

struct StreamInfo {
    kind: StreamKind,
    sampling_freq: f64,
    first_ts: i64,
    last_ts: i64,
}

/// Concatenate several continuous streams under common timestamps.
///
/// The selected streams may have different sampling frequencies and
/// different coverage, so each is interpolated onto a shared evenly spaced
/// timeline spanning the overlap window: from the latest first timestamp to
/// the earliest last timestamp (exclusive), stepped by `round(1e9 / hz)`
/// nanoseconds at the resolved target frequency. The joined output carries
/// the common `timestamp`/`time` axes plus every stream's columns; the
/// per-stream results are checked for identical row counts and timestamps
/// before joining, and any mismatch reports an internal alignment failure.
///
/// `stream_names` follows the selection rules of [`StreamKind::resolve`]:
/// `["all"]` expands to the full supported set, names are case-insensitive,
/// `3d_eye_states` aliases `eye_states`, and duplicates collapse.
///
/// An empty overlap window (no instant covered by every stream) yields an
/// empty table that still carries the joined schema.
///
/// # Errors
/// - `FoveaError::InvalidInput` for unknown names, fewer than two distinct
///   streams, a non-finite/non-positive explicit frequency, a frequency too
///   high for a nanosecond grid, or column names shared between streams
///   (detected before any resampling runs).
/// - `FoveaError::StreamUnavailable` when a selected stream is not present
///   on the recording.
/// - `FoveaError::Alignment` when a post-resample consistency check fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(rec), level = "debug"))]
pub fn concat_streams<R>(
    rec: &mut R,
    stream_names: &[&str],
    cfg: &StreamAlignConfig,
) -> Result<TimeSeriesTable, FoveaError>
where
    R: Recording + ?Sized,
{
    let kinds = StreamKind::resolve(stream_names)?;
    if kinds.len() < 2 {
        return Err(FoveaError::invalid_input(
            "at least two distinct streams are required to concatenate",
        ));
    }

    let mut info = Vec::with_capacity(kinds.len());
    let mut seen_columns: Vec<String> = Vec::new();
    for &kind in &kinds {
        let stream = rec
            .stream(kind)
            .ok_or_else(|| FoveaError::stream_unavailable(kind.as_str()))?;
        for name in stream.data().column_names() {
            if seen_columns.iter().any(|c| c == name) {
                return Err(FoveaError::invalid_input(format!(
                    "column `{name}` appears in more than one selected stream"
                )));
            }
            seen_columns.push(name.to_string());
        }
        info.push(StreamInfo {
            kind,
            sampling_freq: stream.sampling_freq_nominal(),
            first_ts: stream.first_ts(),
            last_ts: stream.last_ts(),
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(stream = kind.as_str(), "selected stream");
    }

    let hz = resolve_frequency(&info, cfg.sampling_freq)?;
    let step = (1e9 / hz).round() as i64;
    if step < 1 {
        return Err(FoveaError::invalid_input(format!(
            "sampling frequency {hz} Hz is too high for a nanosecond grid"
        )));
    }

    // Overlap window: every selected stream has data over [start, end).
    let start = info.iter().map(|s| s.first_ts).max().unwrap_or(0);
    let end = info.iter().map(|s| s.last_ts).min().unwrap_or(0);
    #[cfg(feature = "tracing")]
    tracing::debug!(hz, start, end, step, "resolved common timeline");

    let new_ts: Vec<i64> = if start < end {
        (start..end).step_by(step as usize).collect()
    } else {
        Vec::new()
    };

    let mut columns: Vec<Column> = Vec::new();
    for s in &info {
        let stream = rec
            .stream_mut(s.kind)
            .ok_or_else(|| FoveaError::stream_unavailable(s.kind.as_str()))?;
        let resampled = stream.resample(&new_ts, cfg.float_kind, cfg.other_kind, cfg.replace)?;
        if resampled.len() != new_ts.len() || resampled.timestamps() != new_ts.as_slice() {
            return Err(FoveaError::alignment(format!(
                "resampled `{}` does not match the common timeline",
                s.kind.as_str()
            )));
        }
        columns.extend(resampled.into_columns());
    }
    TimeSeriesTable::new(new_ts, columns)
}

fn resolve_frequency(info: &[StreamInfo], policy: SamplingFreq) -> Result<f64, FoveaError> {
    match policy {
        SamplingFreq::Min => Ok(info
            .iter()
            .map(|s| s.sampling_freq)
            .fold(f64::INFINITY, f64::min)),
        SamplingFreq::Max => Ok(info.iter().map(|s| s.sampling_freq).fold(0.0, f64::max)),
        SamplingFreq::Hz(hz) => {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(FoveaError::invalid_input(
                    "sampling frequency must be a positive, finite Hz value",
                ));
            }
            Ok(hz)
        }
    }
}
