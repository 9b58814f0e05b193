//! Trait for windowed display and user-interaction backends.

use super::{BoundingBox, Frame, Overlay};

/// Trait for windowed display and user-interaction backends.
///
/// The loop owns exactly one logical window for its whole lifetime and
/// names it on every call, so a display may be shared across loops.
pub trait Display {
    /// Render a frame with its overlay in the named window.
    fn show(&mut self, window: &str, frame: &Frame, overlay: &Overlay);

    /// Block while the user draws a rectangle on the displayed frame.
    ///
    /// Returns `None` if the user cancelled the selection.
    fn select_region(&mut self, window: &str, frame: &Frame) -> Option<BoundingBox>;

    /// Poll for a pressed key, waiting at most `timeout_ms`.
    ///
    /// Doubles as the loop's cooperative yield point, so even a
    /// 1-millisecond timeout must actually pump the UI event queue.
    fn poll_key(&mut self, timeout_ms: u64) -> Option<char>;

    /// Tear down every window this display created.
    ///
    /// Must be safe to call more than once.
    fn destroy_all(&mut self);
}
