//! Selection and resampling-policy primitives used by the alignment
//! entry points.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FoveaError;

/// Continuous sensor streams a recording may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamKind {
    /// Gaze position samples.
    Gaze,
    /// 3-D eye-state samples (pupillometry, eyelid geometry).
    EyeStates,
    /// Inertial-motion samples.
    Imu,
}

impl StreamKind {
    /// Every supported stream, in canonical selection order.
    pub const ALL: [Self; 3] = [Self::Gaze, Self::EyeStates, Self::Imu];

    /// Canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gaze => "gaze",
            Self::EyeStates => "eye_states",
            Self::Imu => "imu",
        }
    }

    /// Resolve a caller-supplied name list into distinct kinds in canonical
    /// order. `["all"]` expands to [`StreamKind::ALL`]; names are matched
    /// case-insensitively and duplicates collapse.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` for an unknown name or for
    /// `"all"` mixed with named streams.
    pub fn resolve(names: &[&str]) -> Result<Vec<Self>, FoveaError> {
        resolve_kinds(names, &Self::ALL, "stream")
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamKind {
    type Err = FoveaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gaze" => Ok(Self::Gaze),
            "eye_states" | "3d_eye_states" => Ok(Self::EyeStates),
            "imu" => Ok(Self::Imu),
            other => Err(FoveaError::invalid_input(format!(
                "unknown stream name `{other}`; expected one of gaze, eye_states, imu"
            ))),
        }
    }
}

/// Discrete event kinds a recording may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Blink intervals.
    Blink,
    /// Fixation intervals.
    Fixation,
    /// Saccade intervals.
    Saccade,
    /// Free-text annotations ("events") with a single timestamp.
    Event,
}

impl EventKind {
    /// Every supported event kind, in canonical selection order.
    pub const ALL: [Self; 4] = [Self::Blink, Self::Fixation, Self::Saccade, Self::Event];

    /// Canonical singular name, also used as the `type` discriminator value
    /// in concatenated event tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::Fixation => "fixation",
            Self::Saccade => "saccade",
            Self::Event => "event",
        }
    }

    /// Resolve a caller-supplied name list into distinct kinds in canonical
    /// order. `["all"]` expands to [`EventKind::ALL`]; singular and plural
    /// forms are both accepted, matched case-insensitively; duplicates
    /// collapse.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` for an unknown name or for
    /// `"all"` mixed with named kinds.
    pub fn resolve(names: &[&str]) -> Result<Vec<Self>, FoveaError> {
        resolve_kinds(names, &Self::ALL, "event")
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = FoveaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blink" | "blinks" => Ok(Self::Blink),
            "fixation" | "fixations" => Ok(Self::Fixation),
            "saccade" | "saccades" => Ok(Self::Saccade),
            "event" | "events" => Ok(Self::Event),
            other => Err(FoveaError::invalid_input(format!(
                "unknown event name `{other}`; expected one of blinks, fixations, saccades, events"
            ))),
        }
    }
}

fn resolve_kinds<K>(names: &[&str], all: &[K], what: &str) -> Result<Vec<K>, FoveaError>
where
    K: Copy + PartialEq + FromStr<Err = FoveaError>,
{
    if names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        if names.len() > 1 {
            return Err(FoveaError::invalid_input(format!(
                "`all` cannot be combined with named {what}s"
            )));
        }
        return Ok(all.to_vec());
    }
    let mut parsed = Vec::with_capacity(names.len());
    for name in names {
        parsed.push(name.parse::<K>()?);
    }
    // Canonical order, duplicates collapsed.
    Ok(all
        .iter()
        .copied()
        .filter(|k| parsed.contains(k))
        .collect())
}

/// Target sampling frequency policy for stream concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SamplingFreq {
    /// Use the lowest nominal frequency among the selected streams.
    #[default]
    Min,
    /// Use the highest nominal frequency among the selected streams.
    Max,
    /// Use this frequency verbatim, in Hz.
    Hz(f64),
}

impl FromStr for SamplingFreq {
    type Err = FoveaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            other => other.parse::<f64>().map(Self::Hz).map_err(|_| {
                FoveaError::invalid_input(format!(
                    "invalid sampling frequency `{s}`; expected `min`, `max`, or a Hz value"
                ))
            }),
        }
    }
}

/// Interpolation applied to continuous (float) columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContinuousInterp {
    /// Piecewise-linear between the two bracketing source samples.
    #[default]
    Linear,
    /// Value of the closest source sample; ties resolve to the earlier one.
    Nearest,
}

/// Interpolation applied to discrete (integer/categorical/text) columns.
/// Discrete values are sampled from a single source row, never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscreteInterp {
    /// Value of the closest source sample; ties resolve to the earlier one.
    #[default]
    Nearest,
    /// Value of the latest source sample at or before the target.
    Previous,
    /// Value of the earliest source sample at or after the target.
    Next,
}

/// Inclusive crop bounds over one of the two time axes.
///
/// An omitted bound defaults to the table's observed minimum/maximum on that
/// side; omitting both is rejected by `crop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeRange {
    /// Bounds are absolute nanosecond timestamps.
    Timestamps {
        /// Lower bound, inclusive.
        min: Option<i64>,
        /// Upper bound, inclusive.
        max: Option<i64>,
    },
    /// Bounds are relative times in seconds.
    Seconds {
        /// Lower bound, inclusive.
        min: Option<f64>,
        /// Upper bound, inclusive.
        max: Option<f64>,
    },
}

impl TimeRange {
    /// Bounds over the absolute-timestamp axis.
    #[must_use]
    pub const fn timestamps(min: Option<i64>, max: Option<i64>) -> Self {
        Self::Timestamps { min, max }
    }

    /// Bounds over the relative-time axis.
    #[must_use]
    pub const fn seconds(min: Option<f64>, max: Option<f64>) -> Self {
        Self::Seconds { min, max }
    }

    /// True when neither bound is supplied.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(
            self,
            Self::Timestamps {
                min: None,
                max: None
            } | Self::Seconds {
                min: None,
                max: None
            }
        )
    }
}
