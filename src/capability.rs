//! Capability traits for the external vision collaborators.
//!
//! The loop delegates every piece of vision work to three opaque
//! capabilities: a frame source (camera or video file), a single-object
//! tracker, and a windowed display. Implement these traits over any
//! vision binding to drive the loop with it.

mod bbox;
mod display;
mod frame;
mod frame_source;
mod overlay;
mod tracker;

pub use bbox::BoundingBox;
pub use display::Display;
pub use frame::Frame;
pub use frame_source::FrameSource;
pub use overlay::{Color, Label, Overlay, LABEL_ANCHOR};
pub use tracker::{Tracker, TrackerBackend, TrackerFactory};
