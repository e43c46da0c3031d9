#![no_std]

pub mod activity;
pub mod board;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod math8;
pub mod motion_line;
pub mod noise;
pub mod palette;

pub use activity::ActivityLatch;
pub use board::{
    Board, Clock, EmbassyClock, MotionInput, PowerControl, ResetCause, Status, StatusDisplay,
};
pub use config::{ConfigError, DEFAULT_LED_COUNT, MotionLightConfig};
pub use controller::{Cycle, MotionLight, PowerState};
pub use effect::{Effect, FlameConfig, FlameEffect};
pub use motion_line::SharedMotionLine;
pub use palette::{EmberPalette, EmberTone};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
