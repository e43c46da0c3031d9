//! Motion light controller
//!
//! Duty-cycled control loop: while motion keeps arriving the controller
//! renders one effect frame per iteration, and once the keep-alive window
//! runs out it darkens the strip, arms the motion wake source and blocks in
//! light sleep until motion returns.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::activity::ActivityLatch;
use crate::board::{Board, ResetCause, Status};
use crate::color::{Rgb, clear};
use crate::config::{ConfigError, MotionLightConfig};
use crate::effect::{Effect, FlameEffect};
use crate::filter::{BrightnessFilter, Filter};

/// Power state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Animating and polling the motion line
    Active,
    /// Blocked in light sleep
    Sleeping,
}

/// Outcome of one control loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// A frame was rendered at `at`, followed by the frame delay
    Frame { at: Instant },
    /// Keep-alive ran out at `at`, the device slept and woke at `woke_at`
    Slept { at: Instant, woke_at: Instant },
}

/// Motion-activated light controller
///
/// Owns the board, the effect, the frame buffer and all timing state.
pub struct MotionLight<B: Board, E: Effect, const N: usize> {
    board: B,
    effect: E,
    config: MotionLightConfig,
    brightness: BrightnessFilter,

    activity: ActivityLatch,
    state: PowerState,
    frame_buffer: [Rgb; N],

    frames_rendered: u64,
    sleep_count: u32,
}

impl<B: Board, const N: usize> MotionLight<B, FlameEffect, N> {
    /// Create a controller running the flame effect
    pub fn new(board: B, config: MotionLightConfig) -> Result<Self, ConfigError> {
        let effect = FlameEffect::new(config.flame);
        Self::with_effect(board, effect, config)
    }
}

impl<B: Board, E: Effect, const N: usize> MotionLight<B, E, N> {
    /// Create a controller with a custom effect
    pub fn with_effect(
        mut board: B,
        effect: E,
        config: MotionLightConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let now = board.now();

        Ok(Self {
            board,
            effect,
            brightness: BrightnessFilter::new(config.brightness),
            config,
            activity: ActivityLatch::new(now),
            state: PowerState::Active,
            frame_buffer: [Rgb::default(); N],
            frames_rendered: 0,
            sleep_count: 0,
        })
    }

    /// Bring the controller up after a reset
    ///
    /// Every reset cause starts a full keep-alive window from now.
    pub fn boot(&mut self, cause: ResetCause) {
        self.board.set_sensor_power(true);
        self.push_dark();

        self.board.show_status(cause.status());
        #[cfg(feature = "esp32-log")]
        println!("[MotionLight.boot] {}", cause.status().as_str());

        self.effect.reset();
        self.enter_active();
    }

    /// Boot and run the control loop forever
    pub fn run(mut self, cause: ResetCause) -> ! {
        self.boot(cause);
        loop {
            self.poll();
        }
    }

    /// Run one control loop iteration
    ///
    /// Samples motion once, then either renders a frame and waits the frame
    /// delay, or goes through a full sleep/wake cycle.
    pub fn poll(&mut self) -> Cycle {
        let now = self.board.now();
        let motion = self.board.is_motion();
        self.activity.sample(now, motion);

        if self.activity.is_expired(now, self.config.keep_alive) {
            self.enter_sleep();
            self.board.light_sleep();
            let woke_at = self.wake();
            return Cycle::Slept { at: now, woke_at };
        }

        self.render(now);
        self.board.delay(self.config.frame_delay);
        Cycle::Frame { at: now }
    }

    /// Render one frame and push it to the strip
    fn render(&mut self, now: Instant) {
        self.effect.render(now, &mut self.frame_buffer);
        self.brightness.apply(&mut self.frame_buffer);
        self.board.write(&self.frame_buffer);
        self.frames_rendered += 1;
    }

    /// First half of the sleep transition
    ///
    /// Darkens the strip, keeps the sensor powered and arms the motion wake
    /// source. The state is [`PowerState::Sleeping`] until [`Self::wake`].
    pub fn enter_sleep(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[MotionLight.enter_sleep] idle for {} ms, entering light sleep",
            self.activity.idle_for(self.board.now()).as_millis()
        );

        self.push_dark();
        self.board.clear_display();
        self.board.show_status(Status::LightSleep);
        self.board.delay(self.config.sleep_settle);

        // The sensor must stay powered or nothing can wake us
        self.board.set_sensor_power(true);
        self.board.arm_motion_wake();
        self.state = PowerState::Sleeping;
    }

    /// Second half of the sleep transition, after the wake source fired
    ///
    /// Returns the wake instant, which starts a fresh keep-alive window.
    pub fn wake(&mut self) -> Instant {
        // Disarm before the next poll: a line still high at wake would
        // otherwise wake us again the moment we sleep
        self.board.disarm_motion_wake();
        self.sleep_count += 1;

        self.board.wake_display();
        self.board.clear_display();
        self.board.show_status(Status::Wakeup);

        let woke_at = self.enter_active();
        #[cfg(feature = "esp32-log")]
        println!("[MotionLight.wake] woke at {} ms", woke_at.as_millis());
        woke_at
    }

    /// Switch to active with a fresh keep-alive window
    fn enter_active(&mut self) -> Instant {
        let now = self.board.now();
        self.activity.touch(now);
        self.state = PowerState::Active;
        self.board.show_status(Status::Active);
        now
    }

    fn push_dark(&mut self) {
        clear(&mut self.frame_buffer);
        self.board.write(&self.frame_buffer);
    }

    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Instant of the last motion, boot or wake
    pub const fn last_activity(&self) -> Instant {
        self.activity.last_activity()
    }

    /// Time left before the controller goes to sleep
    pub fn remaining(&self, now: Instant) -> Duration {
        let idle = self.activity.idle_for(now);
        if idle >= self.config.keep_alive {
            Duration::from_ticks(0)
        } else {
            self.config.keep_alive - idle
        }
    }

    /// Last frame pushed to the strip
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    pub const fn config(&self) -> &MotionLightConfig {
        &self.config
    }

    pub const fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Frames rendered since creation
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Completed sleep/wake cycles since creation
    pub const fn sleep_count(&self) -> u32 {
        self.sleep_count
    }
}
