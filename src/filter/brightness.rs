//! Global brightness ceiling
//!
//! Scales every pushed frame by a fixed factor, the same way a strip
//! driver's global brightness setting would.

use super::Filter;
use crate::{color::Rgb, math8::scale8};

/// Scales the whole frame by a constant brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    /// Scale factor (0-255 = 0.0-1.0)
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if self.brightness == 255 {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.brightness);
            pixel.g = scale8(pixel.g, self.brightness);
            pixel.b = scale8(pixel.b, self.brightness);
        }
    }
}
