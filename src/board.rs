//! Hardware collaborators
//!
//! The controller talks to the board only through these traits. Every call
//! is treated as infallible; a platform that can fail underneath is expected
//! to handle it before returning.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;

/// PIR hat input on the M5StickC Plus2
pub const PIR_PIN: u8 = 36;
/// Grove port A data line driving the LED board
pub const LED_PIN: u8 = 32;

/// Monotonic time source and blocking delay
pub trait Clock {
    /// Current monotonic time since boot
    fn now(&mut self) -> Instant;

    /// Block for the given duration
    fn delay(&mut self, duration: Duration);
}

/// Digital motion input, active high
pub trait MotionInput {
    /// Read the current level of the motion line
    fn is_motion(&mut self) -> bool;
}

/// Power management of the board
pub trait PowerControl {
    /// Enable or disable the external (sensor) supply rail
    fn set_sensor_power(&mut self, enabled: bool);

    /// Arm a wake-up on the motion line going high
    fn arm_motion_wake(&mut self);

    /// Disarm the motion wake-up
    fn disarm_motion_wake(&mut self);

    /// Enter light sleep
    ///
    /// Blocks until an armed wake source fires. Memory and peripheral power
    /// are retained.
    fn light_sleep(&mut self);
}

/// Status text shown by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Booted from power-on or a plain reset
    PowerOn,
    /// Booted by the motion wake source
    WakeupPir,
    /// Animating
    Active,
    /// About to enter light sleep
    LightSleep,
    /// Resumed from light sleep
    Wakeup,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => "Power ON",
            Self::WakeupPir => "Wakeup: PIR",
            Self::Active => "Active...",
            Self::LightSleep => "Light Sleep...",
            Self::Wakeup => "Wakeup!",
        }
    }
}

/// Optional status display
///
/// All methods default to no-ops so a board without a screen can opt out
/// with an empty impl.
pub trait StatusDisplay {
    /// Show a status line
    fn show_status(&mut self, _status: Status) {}

    /// Clear the screen
    fn clear_display(&mut self) {}

    /// Power the display back up after sleep
    fn wake_display(&mut self) {}
}

/// Why the controller was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetCause {
    /// Power-on or any reset not caused by the motion wake source
    #[default]
    PowerOn,
    /// Woken from a deep reset by the motion line
    MotionWake,
}

impl ResetCause {
    pub const fn status(self) -> Status {
        match self {
            Self::PowerOn => Status::PowerOn,
            Self::MotionWake => Status::WakeupPir,
        }
    }
}

/// Everything the controller needs from the board
pub trait Board: Clock + MotionInput + OutputDriver + PowerControl + StatusDisplay {}

impl<T> Board for T where T: Clock + MotionInput + OutputDriver + PowerControl + StatusDisplay {}

/// [`Clock`] backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
