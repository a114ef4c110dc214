//! Re-export of foundational types from `fovea-types`.
// Consolidated re-exports so downstream crates can depend on `fovea-core` only

pub use fovea_types::{
    Column, ColumnData, ContinuousInterp, DiscreteInterp, Dtype, EventKind, FoveaError,
    InterpClass, SamplingFreq, StreamKind, TimeRange, TimeSeriesTable,
};
