//! Builder for configuring a capture-and-track loop.

use crate::capability::{Display, FrameSource, Tracker, TrackerBackend, TrackerFactory};

use super::config::{LoopConfig, OverlayStyle};
use super::controller::{CaptureTrackLoop, RunError};

/// Builder for a [`CaptureTrackLoop`] over custom configuration.
#[derive(Debug, Clone, Default)]
pub struct LoopBuilder {
    config: LoopConfig,
}

impl LoopBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window every frame is rendered into.
    pub fn window_name(mut self, name: impl Into<String>) -> Self {
        self.config.window_name = name.into();
        self
    }

    /// Set the key that stops the loop.
    pub fn stop_key(mut self, key: char) -> Self {
        self.config.stop_key = key;
        self
    }

    /// Set the per-iteration key poll timeout.
    pub fn poll_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.poll_timeout_ms = timeout_ms;
        self
    }

    /// Set the overlay strategy for tracked frames.
    pub fn overlay(mut self, style: OverlayStyle) -> Self {
        self.config.overlay = style;
        self
    }

    /// Set the tracker backend resolved by `build_with_factory`.
    pub fn backend(mut self, backend: TrackerBackend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Build the loop over an already-constructed tracker.
    pub fn build<S, T, D>(self, source: S, tracker: T, display: D) -> CaptureTrackLoop<S, T, D>
    where
        S: FrameSource,
        T: Tracker,
        D: Display,
    {
        CaptureTrackLoop::new(source, tracker, display, self.config)
    }

    /// Build the loop, resolving the configured backend through a
    /// factory. Resolution happens here, once, before any frame is
    /// read.
    pub fn build_with_factory<S, D, F>(
        self,
        source: S,
        factory: &F,
        display: D,
    ) -> Result<CaptureTrackLoop<S, Box<dyn Tracker>, D>, RunError>
    where
        S: FrameSource,
        D: Display,
        F: TrackerFactory,
    {
        let backend = self.config.backend;
        let tracker = factory
            .create(backend)
            .ok_or(RunError::UnsupportedBackend(backend))?;
        Ok(CaptureTrackLoop::new(source, tracker, display, self.config))
    }
}
