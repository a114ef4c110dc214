//! The recording collaborator interface consumed by the alignment entry
//! points.

use serde::{Deserialize, Serialize};

use fovea_types::{
    ContinuousInterp, DiscreteInterp, EventKind, FoveaError, StreamKind, TimeSeriesTable,
};

use crate::timeseries::infer::estimate_step_ns;
use crate::timeseries::interpolate::interpolate;

/// A continuous sensor stream: its sample table plus the device-declared
/// nominal sampling rate.
///
/// A stream always holds at least one sample, so `first_ts`/`last_ts` are
/// total. The table itself is immutable through this handle except for the
/// opt-in write-back in [`Stream::resample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    data: TimeSeriesTable,
    sampling_freq_nominal: f64,
}

impl Stream {
    /// Wrap a sample table with its nominal sampling frequency.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` for an empty table or a
    /// non-finite/non-positive frequency.
    pub fn new(data: TimeSeriesTable, sampling_freq_nominal: f64) -> Result<Self, FoveaError> {
        if data.is_empty() {
            return Err(FoveaError::invalid_input(
                "stream data must contain at least one sample",
            ));
        }
        if !sampling_freq_nominal.is_finite() || sampling_freq_nominal <= 0.0 {
            return Err(FoveaError::invalid_input(
                "nominal sampling frequency must be a positive, finite Hz value",
            ));
        }
        Ok(Self {
            data,
            sampling_freq_nominal,
        })
    }

    /// The stream's sample table.
    #[must_use]
    pub const fn data(&self) -> &TimeSeriesTable {
        &self.data
    }

    /// Device-declared sampling rate in Hz.
    #[must_use]
    pub const fn sampling_freq_nominal(&self) -> f64 {
        self.sampling_freq_nominal
    }

    /// Sampling rate observed in the data, derived from the representative
    /// sample spacing. `None` when the stream holds fewer than two distinct
    /// timestamps.
    #[must_use]
    pub fn sampling_freq_effective(&self) -> Option<f64> {
        estimate_step_ns(self.data.timestamps()).map(|step| 1e9 / step as f64)
    }

    /// First sample timestamp in nanoseconds.
    #[must_use]
    pub fn first_ts(&self) -> i64 {
        // Non-empty by construction.
        self.data.timestamps()[0]
    }

    /// Last sample timestamp in nanoseconds.
    #[must_use]
    pub fn last_ts(&self) -> i64 {
        self.data.timestamps()[self.data.len() - 1]
    }

    /// Resample this stream's table onto `new_ts` (see
    /// [`crate::timeseries::interpolate::interpolate`]).
    ///
    /// With `replace` set, the resampled table also replaces this stream's
    /// cached data, invalidating any previously read view of it; the
    /// default leaves the source untouched. An empty resampled table is
    /// returned but never installed, so the stream keeps its at-least-one-
    /// sample guarantee.
    ///
    /// # Errors
    /// Propagates interpolation failures.
    pub fn resample(
        &mut self,
        new_ts: &[i64],
        float_kind: ContinuousInterp,
        other_kind: DiscreteInterp,
        replace: bool,
    ) -> Result<TimeSeriesTable, FoveaError> {
        let resampled = interpolate(new_ts, &self.data, float_kind, other_kind)?;
        if replace && !resampled.is_empty() {
            self.data = resampled.clone();
        }
        Ok(resampled)
    }
}

/// Read access to a recording's named streams and event tables.
///
/// Accessors return `None` when the corresponding stream or event kind was
/// not recorded or not loaded; the alignment entry points turn that into
/// [`FoveaError::StreamUnavailable`].
pub trait Recording {
    /// The named continuous stream, if present.
    fn stream(&self, kind: StreamKind) -> Option<&Stream>;

    /// Mutable access to the named continuous stream, if present. Needed by
    /// [`crate::align::concat_streams`] for the opt-in replace write-back.
    fn stream_mut(&mut self, kind: StreamKind) -> Option<&mut Stream>;

    /// The named event table, if present.
    fn events(&self, kind: EventKind) -> Option<&TimeSeriesTable>;
}
