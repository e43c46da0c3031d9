//! Noise-to-color mapping for the flame effect
//!
//! Maps a noise sample onto a warm hue band (red through orange to yellow)
//! and a brightness band whose floor keeps every LED glowing.

use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::math8::remap8;

/// Lowest hue of the ember band (red)
pub const EMBER_HUE_MIN: u8 = 0;
/// Highest hue of the ember band (orange-yellow)
pub const EMBER_HUE_MAX: u8 = 35;
/// Brightness floor, LEDs never go fully dark while active
pub const EMBER_BRIGHTNESS_MIN: u8 = 80;
/// Brightness ceiling before the global brightness filter
pub const EMBER_BRIGHTNESS_MAX: u8 = 255;

/// Hue/brightness pair produced for one noise sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmberTone {
    pub hue: u8,
    pub brightness: u8,
}

impl EmberTone {
    /// Convert to RGB at full saturation
    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(Hsv {
            hue: self.hue,
            sat: 255,
            val: self.brightness,
        })
    }
}

/// Bounds of the ember color band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmberPalette {
    pub hue_min: u8,
    pub hue_max: u8,
    pub brightness_min: u8,
    pub brightness_max: u8,
}

impl Default for EmberPalette {
    fn default() -> Self {
        Self::EMBER
    }
}

impl EmberPalette {
    /// Red-to-yellow band with an 80 brightness floor
    pub const EMBER: Self = Self {
        hue_min: EMBER_HUE_MIN,
        hue_max: EMBER_HUE_MAX,
        brightness_min: EMBER_BRIGHTNESS_MIN,
        brightness_max: EMBER_BRIGHTNESS_MAX,
    };

    /// Map a noise sample to a tone
    ///
    /// Both channels are linear in `sample`: `0` yields the lower bounds and
    /// `255` the upper bounds.
    #[inline]
    pub const fn tone(self, sample: u8) -> EmberTone {
        EmberTone {
            hue: remap8(sample, self.hue_min, self.hue_max),
            brightness: remap8(sample, self.brightness_min, self.brightness_max),
        }
    }
}
