//! Effect system
//!
//! An effect fills a frame from the current instant. Effects keep no
//! per-frame state of their own, so rendering the same instant twice yields
//! the same frame.

mod flame;

use embassy_time::Instant;
pub use flame::{FLAME_CLOCK_DIVISOR, FLAME_STRIDE, FlameConfig, FlameEffect};

use crate::color::Rgb;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}
