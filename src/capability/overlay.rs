//! Per-frame annotation handed to the display for rendering.

use super::BoundingBox;

/// RGB color triple.
pub type Color = (u8, u8, u8);

/// Where status labels are anchored, in pixel coordinates.
pub const LABEL_ANCHOR: (u32, u32) = (75, 75);

const BOX_COLOR: Color = (255, 0, 255);
const TRACKING_COLOR: Color = (0, 255, 0);
const LOST_COLOR: Color = (225, 0, 0);

/// Text annotation with an anchor in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: (u32, u32),
    pub color: Color,
}

/// Everything the display should render over one frame.
///
/// The loop fills one of these per iteration and the display draws it;
/// displays without text support may ignore the label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Rectangle at the tracked object's location, if one should be drawn.
    pub rect: Option<BoundingBox>,
    /// Outline color for the rectangle.
    pub rect_color: Option<Color>,
    /// Status label, if any.
    pub label: Option<Label>,
}

impl Overlay {
    /// No annotation at all (the raw first frame before selection).
    pub fn none() -> Self {
        Self::default()
    }

    /// Successful update under the labelled-box style.
    pub fn tracking(rect: BoundingBox) -> Self {
        Self {
            rect: Some(rect),
            rect_color: Some(BOX_COLOR),
            label: Some(Label {
                text: "Tracking!".to_string(),
                anchor: LABEL_ANCHOR,
                color: TRACKING_COLOR,
            }),
        }
    }

    /// Successful update under the FPS-counter style.
    pub fn fps(rect: BoundingBox, fps: f32) -> Self {
        Self {
            rect: Some(rect),
            rect_color: Some(BOX_COLOR),
            label: Some(Label {
                text: format!("FPS: {fps:.0}"),
                anchor: LABEL_ANCHOR,
                color: TRACKING_COLOR,
            }),
        }
    }

    /// Failed update. The stale box is deliberately left undrawn.
    pub fn lost() -> Self {
        Self {
            rect: None,
            rect_color: None,
            label: Some(Label {
                text: "OBJECT_LOST!".to_string(),
                anchor: LABEL_ANCHOR,
                color: LOST_COLOR,
            }),
        }
    }

    /// Whether this overlay marks a lost target.
    pub fn is_lost(&self) -> bool {
        self.rect.is_none() && self.label.is_some()
    }
}
