//! Build-time configuration of the motion light

use core::fmt;

use embassy_time::Duration;

use crate::effect::FlameConfig;

/// Number of LEDs on the hex LED board
pub const DEFAULT_LED_COUNT: usize = 37;

/// Global strip brightness (max 255)
pub const DEFAULT_BRIGHTNESS: u8 = 150;

/// How long the light stays on after the last motion
pub const KEEP_ALIVE: Duration = Duration::from_millis(30_000);

/// Shorter keep-alive used by the desk variant
pub const KEEP_ALIVE_SHORT: Duration = Duration::from_millis(10_000);

/// Idle time after each rendered frame
pub const FRAME_DELAY: Duration = Duration::from_millis(20);

/// Pause between showing the sleep status and arming the wake source
pub const SLEEP_SETTLE: Duration = Duration::from_millis(100);

/// Invalid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Keep-alive window must be longer than zero
    ZeroKeepAlive,
    /// Hue lower bound is above the upper bound
    InvertedHueRange,
    /// Brightness floor is above the brightness maximum
    InvertedBrightnessRange,
    /// Brightness floor of zero lets LEDs go dark while active
    DarkFloor,
    /// Animation clock divisor must be non-zero
    ZeroClockDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroKeepAlive => write!(f, "keep-alive window must be positive"),
            Self::InvertedHueRange => write!(f, "hue minimum exceeds hue maximum"),
            Self::InvertedBrightnessRange => {
                write!(f, "brightness floor exceeds brightness maximum")
            }
            Self::DarkFloor => write!(f, "brightness floor must be above zero"),
            Self::ZeroClockDivisor => write!(f, "animation clock divisor must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Configuration for the motion light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionLightConfig {
    /// Active time after the last activity
    pub keep_alive: Duration,
    /// Idle time after each frame
    pub frame_delay: Duration,
    /// Pause before arming the wake source
    pub sleep_settle: Duration,
    /// Global strip brightness
    pub brightness: u8,
    /// Flame animation parameters
    pub flame: FlameConfig,
}

impl Default for MotionLightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MotionLightConfig {
    pub const DEFAULT: Self = Self {
        keep_alive: KEEP_ALIVE,
        frame_delay: FRAME_DELAY,
        sleep_settle: SLEEP_SETTLE,
        brightness: DEFAULT_BRIGHTNESS,
        flame: FlameConfig::DEFAULT,
    };

    /// Same configuration with a different keep-alive window
    #[must_use]
    pub const fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let palette = &self.flame.palette;
        if self.keep_alive.as_ticks() == 0 {
            return Err(ConfigError::ZeroKeepAlive);
        }
        if palette.hue_min > palette.hue_max {
            return Err(ConfigError::InvertedHueRange);
        }
        if palette.brightness_min > palette.brightness_max {
            return Err(ConfigError::InvertedBrightnessRange);
        }
        if palette.brightness_min == 0 {
            return Err(ConfigError::DarkFloor);
        }
        if self.flame.clock_divisor == 0 {
            return Err(ConfigError::ZeroClockDivisor);
        }
        Ok(())
    }
}
