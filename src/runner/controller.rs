//! The capture-and-track loop controller.

use log::{debug, info, warn};
use thiserror::Error;

use crate::capability::{
    BoundingBox, Display, FrameSource, Overlay, Tracker, TrackerBackend,
};

use super::config::{LoopConfig, OverlayStyle};
use super::fps::FpsCounter;
use super::state::TrackingState;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The very first read failed; no window was ever shown.
    SourceUnavailable,
    /// A mid-loop read failed; the stream ended normally.
    EndOfStream { frames: u64 },
    /// The user pressed the stop key.
    Stopped { frames: u64 },
}

/// Startup failures surfaced to the caller.
///
/// Acquisition and tracking failures are deliberately not in here:
/// both are expected, recoverable conditions the loop handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The user cancelled the region selection.
    #[error("region selection cancelled")]
    SelectionCancelled,
    /// The user confirmed a zero-area region.
    #[error("selected region has zero area")]
    EmptySelection,
    /// The tracker factory does not offer the configured backend.
    #[error("unsupported tracker backend {0:?}")]
    UnsupportedBackend(TrackerBackend),
}

/// Drives capture → track → overlay → render until the user stops the
/// loop or the frame source runs out.
///
/// The controller owns its capabilities for its whole lifetime and
/// releases them exactly once, on every exit path.
pub struct CaptureTrackLoop<S: FrameSource, T: Tracker, D: Display> {
    source: S,
    tracker: T,
    display: D,
    config: LoopConfig,
    state: TrackingState,
    bbox: Option<BoundingBox>,
    fps: FpsCounter,
    released: bool,
}

impl<S: FrameSource, T: Tracker, D: Display> core::fmt::Debug for CaptureTrackLoop<S, T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CaptureTrackLoop")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("bbox", &self.bbox)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

impl<S: FrameSource, T: Tracker, D: Display> CaptureTrackLoop<S, T, D> {
    /// Create a new loop over the given capabilities.
    pub fn new(source: S, tracker: T, display: D, config: LoopConfig) -> Self {
        Self {
            source,
            tracker,
            display,
            config,
            state: TrackingState::Uninitialized,
            bbox: None,
            fps: FpsCounter::new(),
            released: false,
        }
    }

    /// Run the loop to completion.
    ///
    /// Blocks for the interactive region selection on the first frame,
    /// then iterates until the stop key is pressed or the stream ends.
    /// Whatever happens, the capture handle and display are released
    /// before this returns.
    pub fn run(&mut self) -> Result<RunOutcome, RunError> {
        let Some(first) = self.source.read() else {
            warn!("frame source produced no frames");
            self.shutdown();
            return Ok(RunOutcome::SourceUnavailable);
        };

        self.display
            .show(&self.config.window_name, &first, &Overlay::none());

        let Some(seed) = self.display.select_region(&self.config.window_name, &first) else {
            self.shutdown();
            return Err(RunError::SelectionCancelled);
        };
        if seed.is_empty() {
            self.shutdown();
            return Err(RunError::EmptySelection);
        }

        let seeded = self.tracker.init(&first, seed);
        self.state = self.state.on_init(seeded);
        self.bbox = Some(seed);
        if seeded {
            info!("tracker seeded at {seed:?}");
        } else {
            warn!("tracker rejected the seed region, starting lost");
        }

        let mut frames = 0u64;
        let outcome = loop {
            let Some(frame) = self.source.read() else {
                break RunOutcome::EndOfStream { frames };
            };

            let overlay = match self.tracker.update(&frame) {
                Some(bbox) => {
                    if !self.state.is_tracking() {
                        debug!("target reacquired at {bbox:?}");
                    }
                    self.state = self.state.on_update(true);
                    self.bbox = Some(bbox);
                    match self.config.overlay {
                        OverlayStyle::LabelledBox => Overlay::tracking(bbox),
                        OverlayStyle::FpsCounter => Overlay::fps(bbox, self.fps.tick()),
                    }
                }
                None => {
                    if self.state.is_tracking() {
                        debug!("target lost");
                    }
                    self.state = self.state.on_update(false);
                    // The stale box stays undrawn while the target is lost.
                    Overlay::lost()
                }
            };

            self.display.show(&self.config.window_name, &frame, &overlay);
            frames += 1;

            if self.display.poll_key(self.config.poll_timeout_ms) == Some(self.config.stop_key) {
                break RunOutcome::Stopped { frames };
            }
        };

        info!("loop finished: {outcome:?}");
        self.shutdown();
        Ok(outcome)
    }

    /// Current tracking state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// The most recent box: the seed region, or the latest successful
    /// update. Stale while the target is lost.
    pub fn last_bbox(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Get a reference to the loop configuration.
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Get a reference to the underlying frame source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Get a reference to the underlying display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Release the capture handle and tear down the display, once.
    fn shutdown(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.source.release();
        self.display.destroy_all();
    }
}

impl<S: FrameSource, T: Tracker, D: Display> Drop for CaptureTrackLoop<S, T, D> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Frame;
    use std::collections::VecDeque;

    struct ScriptedSource {
        frames: VecDeque<Frame>,
        released: u32,
    }

    impl ScriptedSource {
        fn with_frames(n: usize) -> Self {
            Self {
                frames: (0..n).map(|_| Frame::new(8, 6, 3)).collect(),
                released: 0,
            }
        }
    }

    impl FrameSource for ScriptedSource {
        fn read(&mut self) -> Option<Frame> {
            self.frames.pop_front()
        }

        fn release(&mut self) {
            self.released += 1;
        }
    }

    struct ScriptedTracker {
        init_ok: bool,
        inits: Vec<BoundingBox>,
        updates: u32,
    }

    impl ScriptedTracker {
        fn accepting() -> Self {
            Self {
                init_ok: true,
                inits: Vec::new(),
                updates: 0,
            }
        }

        fn rejecting() -> Self {
            Self {
                init_ok: false,
                inits: Vec::new(),
                updates: 0,
            }
        }
    }

    impl Tracker for ScriptedTracker {
        fn init(&mut self, _frame: &Frame, bbox: BoundingBox) -> bool {
            self.inits.push(bbox);
            self.init_ok
        }

        fn update(&mut self, _frame: &Frame) -> Option<BoundingBox> {
            self.updates += 1;
            Some(BoundingBox::new(10.0, 10.0, 50.0, 50.0))
        }
    }

    struct ScriptedDisplay {
        selection: Option<BoundingBox>,
        shown: Vec<Overlay>,
        destroyed: u32,
    }

    impl ScriptedDisplay {
        fn selecting(bbox: BoundingBox) -> Self {
            Self {
                selection: Some(bbox),
                shown: Vec::new(),
                destroyed: 0,
            }
        }

        fn cancelling() -> Self {
            Self {
                selection: None,
                shown: Vec::new(),
                destroyed: 0,
            }
        }
    }

    impl Display for ScriptedDisplay {
        fn show(&mut self, _window: &str, _frame: &Frame, overlay: &Overlay) {
            self.shown.push(overlay.clone());
        }

        fn select_region(&mut self, _window: &str, _frame: &Frame) -> Option<BoundingBox> {
            self.selection
        }

        fn poll_key(&mut self, _timeout_ms: u64) -> Option<char> {
            None
        }

        fn destroy_all(&mut self) {
            self.destroyed += 1;
        }
    }

    fn seed() -> BoundingBox {
        BoundingBox::new(10.0, 10.0, 50.0, 50.0)
    }

    #[test]
    fn test_empty_source_shows_nothing() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(0),
            ScriptedTracker::accepting(),
            ScriptedDisplay::selecting(seed()),
            LoopConfig::default(),
        );

        let outcome = run_loop.run().unwrap();
        assert_eq!(outcome, RunOutcome::SourceUnavailable);
        assert!(run_loop.display().shown.is_empty());
        assert!(run_loop.tracker().inits.is_empty());
        assert_eq!(run_loop.source().released, 1);
        assert_eq!(run_loop.display().destroyed, 1);
    }

    #[test]
    fn test_cancelled_selection_still_releases() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(3),
            ScriptedTracker::accepting(),
            ScriptedDisplay::cancelling(),
            LoopConfig::default(),
        );

        assert_eq!(run_loop.run(), Err(RunError::SelectionCancelled));
        assert!(run_loop.tracker().inits.is_empty());
        assert_eq!(run_loop.source().released, 1);
        assert_eq!(run_loop.display().destroyed, 1);
    }

    #[test]
    fn test_zero_area_selection_is_rejected() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(3),
            ScriptedTracker::accepting(),
            ScriptedDisplay::selecting(BoundingBox::new(10.0, 10.0, 0.0, 0.0)),
            LoopConfig::default(),
        );

        assert_eq!(run_loop.run(), Err(RunError::EmptySelection));
        assert!(run_loop.tracker().inits.is_empty());
        assert_eq!(run_loop.source().released, 1);
    }

    #[test]
    fn test_rejected_init_starts_lost_and_keeps_running() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(2),
            ScriptedTracker::rejecting(),
            ScriptedDisplay::selecting(seed()),
            LoopConfig::default(),
        );

        let outcome = run_loop.run().unwrap();
        // One frame still flowed through the loop after the failed seed
        assert_eq!(outcome, RunOutcome::EndOfStream { frames: 1 });
        assert_eq!(run_loop.tracker().inits, vec![seed()]);
        assert_eq!(run_loop.tracker().updates, 1);
    }

    #[test]
    fn test_seeded_run_tracks_until_end_of_stream() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(4),
            ScriptedTracker::accepting(),
            ScriptedDisplay::selecting(seed()),
            LoopConfig::default(),
        );

        let outcome = run_loop.run().unwrap();
        assert_eq!(outcome, RunOutcome::EndOfStream { frames: 3 });
        assert_eq!(run_loop.state(), TrackingState::Tracking);
        assert_eq!(run_loop.last_bbox(), Some(seed()));
        // First show is the raw selection frame, the rest carry boxes
        assert_eq!(run_loop.display().shown.len(), 4);
        assert_eq!(run_loop.display().shown[0], Overlay::none());
        for overlay in &run_loop.display().shown[1..] {
            assert_eq!(overlay.rect, Some(seed()));
        }
    }

    #[test]
    fn test_shutdown_is_idempotent_across_drop() {
        let mut run_loop = CaptureTrackLoop::new(
            ScriptedSource::with_frames(0),
            ScriptedTracker::accepting(),
            ScriptedDisplay::selecting(seed()),
            LoopConfig::default(),
        );

        run_loop.run().unwrap();
        assert_eq!(run_loop.source().released, 1);
        // Drop must not release a second time; the flag already tripped
        drop(run_loop);
    }
}
