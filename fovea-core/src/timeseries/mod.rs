//! Time-series utilities shared by the alignment entry points.
//!
//! Modules include:
//! - `crop`: restrict a table to an inclusive time range
//! - `infer`: estimate sample cadence from raw timestamp axes
//! - `interpolate`: resample a table onto arbitrary new timestamps
//! - `window`: window-averaged downsampling
/// Inclusive-range cropping.
pub mod crop;
/// Cadence estimation helpers.
pub mod infer;
/// Per-column interpolation onto new timestamps.
pub mod interpolate;
/// Window-averaged downsampling.
pub mod window;
