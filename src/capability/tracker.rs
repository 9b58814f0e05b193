//! Trait for single-object tracking backends.

use super::{BoundingBox, Frame};

/// Trait for single-object tracking backends.
///
/// The tracker is treated as an opaque stateful algorithm: seeded once
/// with a user-selected region, then asked for an updated box on every
/// subsequent frame. A backend that loses the target keeps its internal
/// state and may reacquire it on a later frame without being re-seeded.
///
/// # Example
///
/// ```ignore
/// use trackloop_rs::{BoundingBox, Frame, Tracker};
///
/// struct MyCorrelationTracker {
///     // Your vision-library handle here
/// }
///
/// impl Tracker for MyCorrelationTracker {
///     fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool {
///         // Seed the filter from the selected region
///         true
///     }
///
///     fn update(&mut self, frame: &Frame) -> Option<BoundingBox> {
///         // Report the object's new location, or None when lost
///         None
///     }
/// }
/// ```
pub trait Tracker {
    /// Seed the tracker with the object's location on the first frame.
    ///
    /// Returns `false` if the backend rejected the seed region.
    fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool;

    /// Report the object's location on the next frame.
    ///
    /// Returns `None` when the target was lost on this frame.
    fn update(&mut self, frame: &Frame) -> Option<BoundingBox>;
}

impl Tracker for Box<dyn Tracker> {
    fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool {
        (**self).init(frame, bbox)
    }

    fn update(&mut self, frame: &Frame) -> Option<BoundingBox> {
        (**self).update(frame)
    }
}

/// Tracker algorithms a factory may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerBackend {
    /// Discriminative correlation filter with channel and spatial reliability
    #[default]
    Csrt,
    /// Minimum output sum of squared error filter
    Mosse,
    /// Kernelized correlation filter
    Kcf,
    /// Deep regression network tracker
    Goturn,
}

/// Factory resolving a configured backend to a concrete tracker.
///
/// Resolution happens once, before the loop starts; a backend the
/// factory does not offer is surfaced as a startup error rather than
/// carried as dead code or a mid-loop failure.
pub trait TrackerFactory {
    /// Build a tracker for the requested backend, or `None` if this
    /// factory does not offer it.
    fn create(&self, backend: TrackerBackend) -> Option<Box<dyn Tracker>>;
}
