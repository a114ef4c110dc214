//! fovea-core
//!
//! Resampling and timeline-alignment engine for multi-stream eye-tracking
//! recordings.
//!
//! - `timeseries`: crop, interpolate, window-average, and cadence inference
//!   over a single [`types::TimeSeriesTable`].
//! - `align`: the `concat_streams`/`concat_events` entry points that merge
//!   several streams or event tables onto one common timeline.
//! - `recording`: the collaborator interface through which the alignment
//!   entry points reach a recording's named streams and event tables.
//!
//! Everything here is a synchronous, pure transformation over in-memory
//! tables: no background work, no I/O, no shared state. Inputs are treated
//! as immutable; the single sanctioned exception is the opt-in `replace`
//! write-back on [`recording::Stream::resample`], which the caller must
//! request explicitly and which invalidates any concurrently held view of
//! that stream.
#![warn(missing_docs)]

/// Multi-stream concatenation entry points.
pub mod align;
/// The recording collaborator interface and its per-stream handle.
pub mod recording;
/// Single-table resampling utilities.
pub mod timeseries;
pub mod types;

pub use align::{StreamAlignConfig, concat_events, concat_streams};
pub use recording::{Recording, Stream};
pub use timeseries::crop::crop;
pub use timeseries::infer::{estimate_step_ns, mean_step_ns, median_step_ns};
pub use timeseries::interpolate::interpolate;
pub use timeseries::window::window_average;
pub use types::*;
