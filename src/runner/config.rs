//! Configuration for the capture-and-track loop.

use crate::capability::TrackerBackend;

/// Overlay strategy applied to successfully tracked frames.
///
/// Both strategies render "OBJECT_LOST!" when an update fails; they
/// differ only in what a tracked frame is labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayStyle {
    /// Box plus a "Tracking!" status label
    #[default]
    LabelledBox,
    /// Box plus a live frames-per-second readout
    FpsCounter,
}

/// Configuration for the capture-and-track loop.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Window every frame is rendered into.
    pub window_name: String,
    /// Key that stops the loop.
    pub stop_key: char,
    /// Per-iteration key poll timeout in milliseconds.
    pub poll_timeout_ms: u64,
    /// Overlay strategy for tracked frames.
    pub overlay: OverlayStyle,
    /// Tracker algorithm to resolve through a `TrackerFactory`.
    pub backend: TrackerBackend,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_name: "Tracking".to_string(),
            stop_key: 'q',
            poll_timeout_ms: 1,
            overlay: OverlayStyle::default(),
            backend: TrackerBackend::default(),
        }
    }
}
