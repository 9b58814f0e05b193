//! Pixel buffer exchanged between the frame source, tracker, and display.

use ndarray::Array3;

/// One decoded image from the frame source.
///
/// Pixels are stored in HWC layout (height, width, channels). A frame
/// is produced once per loop iteration and discarded before the next
/// one is acquired; nothing in the loop mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pixels: Array3<u8>,
}

impl Frame {
    /// Create a zeroed frame with the given dimensions.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        Self {
            pixels: Array3::zeros((height as usize, width as usize, channels as usize)),
        }
    }

    /// Wrap an existing pixel array; the array's shape is authoritative.
    pub fn from_pixels(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.shape()[1] as u32
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.shape()[0] as u32
    }

    /// Channel depth (3 for RGB, 1 for grayscale).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.pixels.shape()[2] as u32
    }

    /// Raw pixel view for capability implementations.
    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }
}
