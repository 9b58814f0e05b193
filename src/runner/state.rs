/// Tracking lifecycle for the single tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// No tracker has been seeded yet
    #[default]
    Uninitialized,
    /// The tracker reported the object on the latest frame
    Tracking,
    /// The tracker failed to find the object on the latest frame
    Lost,
}

impl TrackingState {
    /// Transition taken after seeding the tracker.
    ///
    /// A rejected seed starts the loop in `Lost` instead of aborting;
    /// the backend may still reacquire the target on later frames.
    pub fn on_init(self, ok: bool) -> Self {
        if ok { Self::Tracking } else { Self::Lost }
    }

    /// Transition taken after a per-frame update.
    pub fn on_update(self, ok: bool) -> Self {
        if ok { Self::Tracking } else { Self::Lost }
    }

    /// Whether the latest frame carried a successful update.
    pub fn is_tracking(self) -> bool {
        self == Self::Tracking
    }
}
