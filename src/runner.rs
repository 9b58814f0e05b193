//! The capture-and-track run loop.
//!
//! [`CaptureTrackLoop`] owns the three capabilities for its whole
//! lifetime and drives acquire → update → overlay → show → poll until
//! the user presses the stop key or the frame source runs out.

mod builder;
mod config;
mod controller;
mod fps;
mod state;

pub use builder::LoopBuilder;
pub use config::{LoopConfig, OverlayStyle};
pub use controller::{CaptureTrackLoop, RunError, RunOutcome};
pub use fps::FpsCounter;
pub use state::TrackingState;
