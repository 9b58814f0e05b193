//! Wall-clock frame-rate estimate for the FPS overlay.

use std::time::Instant;

const SMOOTHING: f32 = 0.9;

/// Exponentially smoothed frames-per-second estimate.
///
/// One `tick` per displayed frame; the first tick has no interval to
/// measure and reports 0.
#[derive(Debug, Default)]
pub struct FpsCounter {
    last: Option<Instant>,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame and return the current estimate.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Latest estimate without recording a frame.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        if let Some(last) = self.last {
            let dt = now.duration_since(last).as_secs_f32();
            if dt > 0.0 {
                let instantaneous = 1.0 / dt;
                self.fps = if self.fps > 0.0 {
                    SMOOTHING * self.fps + (1.0 - SMOOTHING) * instantaneous
                } else {
                    instantaneous
                };
            }
        }
        self.last = Some(now);
        self.fps
    }
}
