//! Single-object capture-and-track run loop.
//!
//! This crate provides the orchestration layer between a live frame
//! source, an opaque vision tracker, and a display: grab a frame, let
//! the user draw a box around the target, seed the tracker, then keep
//! updating and rendering until the user stops or the stream ends.
//!
//! All vision work (capture, tracking, rendering) is delegated to
//! whatever library implements the [`capability`] traits; the crate
//! itself only owns the loop, its state machine, and the per-frame
//! overlay it hands to the display.

pub mod capability;
pub mod runner;

pub use capability::{
    BoundingBox, Display, Frame, FrameSource, Label, Overlay, Tracker, TrackerBackend,
    TrackerFactory,
};
pub use runner::{
    CaptureTrackLoop, FpsCounter, LoopBuilder, LoopConfig, OverlayStyle, RunError, RunOutcome,
    TrackingState,
};
