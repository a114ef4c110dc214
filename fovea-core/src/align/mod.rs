//! Multi-stream timeline alignment and event concatenation entry points.
/// Event-table concatenation.
pub mod events;
/// Stream concatenation onto a common timeline.
pub mod streams;

pub use events::concat_events;
pub use streams::{StreamAlignConfig, concat_streams};
