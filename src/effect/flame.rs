//! Flame effect
//!
//! Samples a 2-D noise field along the strip: the LED index walks the first
//! axis and the animation clock walks the second. Each sample is mapped
//! through the ember palette, which gives flickering red/orange/yellow
//! embers that drift along the strip.

use embassy_time::Instant;

use super::Effect;
use crate::{color::Rgb, noise::inoise8, palette::EmberPalette};

/// Noise-space distance between neighbouring LEDs
pub const FLAME_STRIDE: u16 = 30;

/// Milliseconds per animation clock step
pub const FLAME_CLOCK_DIVISOR: u32 = 3;

/// Flame effect configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlameConfig {
    /// Noise-space distance between neighbouring LEDs
    pub stride: u16,
    /// Monotonic milliseconds per animation clock step
    pub clock_divisor: u32,
    /// Noise-to-color bounds
    pub palette: EmberPalette,
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FlameConfig {
    pub const DEFAULT: Self = Self {
        stride: FLAME_STRIDE,
        clock_divisor: FLAME_CLOCK_DIVISOR,
        palette: EmberPalette::EMBER,
    };
}

/// Procedural flame driven by coherent noise
#[derive(Debug, Clone)]
pub struct FlameEffect {
    config: FlameConfig,
}

impl Default for FlameEffect {
    fn default() -> Self {
        Self::new(FlameConfig::DEFAULT)
    }
}

impl FlameEffect {
    pub const fn new(config: FlameConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FlameConfig {
        &self.config
    }

    /// Animation clock for the given instant
    ///
    /// The noise field is 16 bits wide on the time axis, so the clock wraps
    /// every `65536 * clock_divisor` milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn animation_clock(&self, now: Instant) -> u16 {
        let divisor = u64::from(self.config.clock_divisor.max(1));
        (now.as_millis() / divisor) as u16
    }

    /// Fill the frame for an explicit animation clock value
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_clock(&self, clock: u16, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let x = (i as u16).wrapping_mul(self.config.stride);
            let sample = inoise8(x, clock);
            *led = self.config.palette.tone(sample).to_rgb();
        }
    }
}

impl Effect for FlameEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let clock = self.animation_clock(now);
        self.render_clock(clock, leds);
    }
}
