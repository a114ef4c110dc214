//! Timestamped table model, selection primitives, and the unified error type
//! shared across the fovea workspace.
#![warn(missing_docs)]

mod error;
mod select;
mod table;

pub use error::FoveaError;
pub use select::{
    ContinuousInterp, DiscreteInterp, EventKind, SamplingFreq, StreamKind, TimeRange,
};
pub use table::{Column, ColumnData, Dtype, InterpClass, TimeSeriesTable};
