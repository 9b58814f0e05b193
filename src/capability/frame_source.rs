//! Trait for frame acquisition backends.

use super::Frame;

/// Trait for frame acquisition backends (cameras, video files).
///
/// Implement this trait to feed any capture device into the loop.
///
/// # Example
///
/// ```ignore
/// use trackloop_rs::{Frame, FrameSource};
///
/// struct MyCamera {
///     // Your capture handle here
/// }
///
/// impl FrameSource for MyCamera {
///     fn read(&mut self) -> Option<Frame> {
///         // Grab and decode the next frame
///         None
///     }
///
///     fn release(&mut self) {
///         // Close the device
///     }
/// }
/// ```
pub trait FrameSource {
    /// Grab and decode the next frame.
    ///
    /// Returns `None` once the stream is exhausted or the device stops
    /// producing frames. The loop treats that as normal termination,
    /// not a fault.
    fn read(&mut self) -> Option<Frame>;

    /// Release the underlying capture handle.
    ///
    /// Must be safe to call more than once.
    fn release(&mut self);
}
