mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_motion_light::{
        Clock, ConfigError, Cycle, Effect, FlameEffect, MotionInput, MotionLight,
        MotionLightConfig, OutputDriver, PowerControl, PowerState, ResetCause, Rgb, Status,
        StatusDisplay,
        color::is_dark,
        config::KEEP_ALIVE_SHORT,
        filter::{BrightnessFilter, Filter},
    };

    const N: usize = 37;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write { dark: bool },
        Motion(bool),
        Status(Status),
        SensorPower(bool),
        ArmWake,
        DisarmWake,
        Sleep,
    }

    /// Board whose clock only moves through `delay` and `light_sleep`
    struct SimBoard {
        now_ms: u64,
        /// Inclusive intervals during which the motion line is high
        motion: Vec<(u64, u64)>,
        wake_armed: bool,
        events: Vec<Event>,
        last_write: Vec<Rgb>,
    }

    impl SimBoard {
        fn new(now_ms: u64, motion: &[(u64, u64)]) -> Self {
            Self {
                now_ms,
                motion: motion.to_vec(),
                wake_armed: false,
                events: Vec::new(),
                last_write: Vec::new(),
            }
        }

        fn motion_at(&self, ms: u64) -> bool {
            self.motion
                .iter()
                .any(|(start, end)| (*start..=*end).contains(&ms))
        }

        fn frames_written(&self) -> usize {
            self.events
                .iter()
                .filter(|event| **event == Event::Write { dark: false })
                .count()
        }
    }

    impl Clock for SimBoard {
        fn now(&mut self) -> Instant {
            Instant::from_millis(self.now_ms)
        }

        fn delay(&mut self, duration: Duration) {
            self.now_ms += duration.as_millis();
        }
    }

    impl MotionInput for SimBoard {
        fn is_motion(&mut self) -> bool {
            let level = self.motion_at(self.now_ms);
            self.events.push(Event::Motion(level));
            level
        }
    }

    impl OutputDriver for SimBoard {
        fn write(&mut self, colors: &[Rgb]) {
            self.events.push(Event::Write {
                dark: is_dark(colors),
            });
            self.last_write = colors.to_vec();
        }
    }

    impl PowerControl for SimBoard {
        fn set_sensor_power(&mut self, enabled: bool) {
            self.events.push(Event::SensorPower(enabled));
        }

        fn arm_motion_wake(&mut self) {
            self.wake_armed = true;
            self.events.push(Event::ArmWake);
        }

        fn disarm_motion_wake(&mut self) {
            self.wake_armed = false;
            self.events.push(Event::DisarmWake);
        }

        fn light_sleep(&mut self) {
            assert!(self.wake_armed, "light sleep without a wake source");
            self.events.push(Event::Sleep);
            let now = self.now_ms;
            let wake = self
                .motion
                .iter()
                .filter(|(_, end)| *end >= now)
                .map(|(start, _)| (*start).max(now))
                .min()
                .expect("no motion scheduled to wake from sleep");
            self.now_ms = wake;
        }
    }

    impl StatusDisplay for SimBoard {
        fn show_status(&mut self, status: Status) {
            self.events.push(Event::Status(status));
        }
    }

    fn config() -> MotionLightConfig {
        MotionLightConfig::DEFAULT.with_keep_alive(KEEP_ALIVE_SHORT)
    }

    fn booted(board: SimBoard) -> MotionLight<SimBoard, FlameEffect, N> {
        let mut light = MotionLight::new(board, config()).expect("valid config");
        light.boot(ResetCause::PowerOn);
        light
    }

    /// Poll until the first sleep cycle, returning the frames before it
    fn run_until_sleep(
        light: &mut MotionLight<SimBoard, FlameEffect, N>,
    ) -> (Vec<Instant>, Instant, Instant) {
        let mut frames = Vec::new();
        loop {
            match light.poll() {
                Cycle::Frame { at } => frames.push(at),
                Cycle::Slept { at, woke_at } => return (frames, at, woke_at),
            }
        }
    }

    #[test]
    fn test_sleeps_exactly_at_keep_alive() {
        let mut light = booted(SimBoard::new(0, &[(60_000, 60_100)]));

        let (frames, slept_at, _) = run_until_sleep(&mut light);
        assert_eq!(frames.len(), 500);
        assert!(frames.iter().all(|at| *at < Instant::from_millis(10_000)));
        assert_eq!(slept_at, Instant::from_millis(10_000));
        assert_eq!(light.frames_rendered(), 500);
        assert_eq!(light.sleep_count(), 1);
    }

    #[test]
    fn test_strip_dark_when_sleeping() {
        let mut light = booted(SimBoard::new(0, &[(60_000, 60_100)]));
        run_until_sleep(&mut light);

        let events = &light.board().events;
        let sleep = events
            .iter()
            .position(|e| *e == Event::Sleep)
            .expect("slept");
        let last_write = events[..sleep]
            .iter()
            .rev()
            .find(|e| matches!(e, Event::Write { .. }))
            .expect("wrote before sleep");
        assert_eq!(*last_write, Event::Write { dark: true });
        assert!(is_dark(&light.board().last_write));
        assert!(is_dark(light.frame()));
    }

    #[test]
    fn test_boot_offset_keeps_full_window() {
        let mut light = booted(SimBoard::new(1_234, &[(60_000, 60_000)]));
        assert_eq!(light.last_activity(), Instant::from_millis(1_234));

        let (frames, slept_at, _) = run_until_sleep(&mut light);
        assert_eq!(frames.len(), 500);
        assert_eq!(slept_at, Instant::from_millis(11_234));
    }

    #[test]
    fn test_motion_defers_sleep() {
        // Motion seen one frame before the window runs out
        let mut light = booted(SimBoard::new(0, &[(9_980, 9_980), (90_000, 90_000)]));

        let (_, slept_at, _) = run_until_sleep(&mut light);
        assert_eq!(slept_at, Instant::from_millis(9_980 + 10_000));
    }

    #[test]
    fn test_continuous_motion_stays_active() {
        let mut light = booted(SimBoard::new(0, &[(0, 5_000), (90_000, 90_000)]));

        let (frames, slept_at, _) = run_until_sleep(&mut light);
        assert_eq!(slept_at, Instant::from_millis(15_000));
        assert_eq!(frames.len(), 750);
        assert!(frames.contains(&Instant::from_millis(5_000)));
    }

    #[test]
    fn test_wake_resets_activity() {
        let mut light = booted(SimBoard::new(0, &[(42_000, 42_000)]));

        let (_, slept_at, woke_at) = run_until_sleep(&mut light);
        assert_eq!(slept_at, Instant::from_millis(10_000));
        assert_eq!(woke_at, Instant::from_millis(42_000));
        assert_eq!(light.state(), PowerState::Active);
        assert_eq!(light.last_activity(), woke_at);
        assert_eq!(
            light.remaining(woke_at),
            Duration::from_millis(10_000)
        );

        // A whole fresh window of frames follows the wake
        let (frames, slept_again, _) = {
            light.board_mut().motion.push((100_000, 100_000));
            run_until_sleep(&mut light)
        };
        assert_eq!(frames.len(), 500);
        assert_eq!(slept_again, Instant::from_millis(52_000));
    }

    #[test]
    fn test_disarm_before_next_poll() {
        // Line is still high when the device wakes
        let mut light = booted(SimBoard::new(0, &[(30_000, 40_000), (90_000, 90_000)]));

        let (_, _, woke_at) = run_until_sleep(&mut light);
        assert_eq!(woke_at, Instant::from_millis(30_000));

        let events = &light.board().events;
        let sleep = events
            .iter()
            .position(|e| *e == Event::Sleep)
            .expect("slept");
        assert_eq!(events[sleep + 1], Event::DisarmWake);
        assert!(!light.board().wake_armed);

        // Next iteration renders instead of sleeping again
        assert!(matches!(light.poll(), Cycle::Frame { .. }));
        let (_, slept_at, woke_again) = run_until_sleep(&mut light);
        assert_eq!(slept_at, Instant::from_millis(50_000));
        assert_eq!(woke_again, Instant::from_millis(90_000));
        assert_eq!(light.sleep_count(), 2);
    }

    #[test]
    fn test_sleep_sequence_order() {
        let mut light = booted(SimBoard::new(0, &[(20_000, 20_000)]));
        light.board_mut().events.clear();
        light.board_mut().now_ms = 10_000;

        assert_eq!(
            light.poll(),
            Cycle::Slept {
                at: Instant::from_millis(10_000),
                woke_at: Instant::from_millis(20_000),
            }
        );
        assert_eq!(
            light.board().events,
            vec![
                Event::Motion(false),
                Event::Write { dark: true },
                Event::Status(Status::LightSleep),
                Event::SensorPower(true),
                Event::ArmWake,
                Event::Sleep,
                Event::DisarmWake,
                Event::Status(Status::Wakeup),
                Event::Status(Status::Active),
            ]
        );
    }

    #[test]
    fn test_sleeping_between_sleep_halves() {
        let mut light = booted(SimBoard::new(0, &[(25_000, 25_000)]));
        light.board_mut().now_ms = 10_000;

        light.enter_sleep();
        assert_eq!(light.state(), PowerState::Sleeping);
        assert!(light.board().wake_armed);
        assert!(is_dark(&light.board().last_write));
        assert_eq!(light.board().now_ms, 10_100);
        assert_eq!(light.sleep_count(), 0);

        light.board_mut().light_sleep();
        let woke_at = light.wake();
        assert_eq!(woke_at, Instant::from_millis(25_000));
        assert_eq!(light.state(), PowerState::Active);
        assert!(!light.board().wake_armed);
        assert_eq!(light.last_activity(), woke_at);
        assert_eq!(light.sleep_count(), 1);
    }

    #[test]
    fn test_boot_sequence() {
        let mut light: MotionLight<SimBoard, FlameEffect, N> =
            MotionLight::new(SimBoard::new(0, &[]), config()).expect("valid config");
        light.boot(ResetCause::MotionWake);

        assert_eq!(light.state(), PowerState::Active);
        assert_eq!(
            light.board().events,
            vec![
                Event::SensorPower(true),
                Event::Write { dark: true },
                Event::Status(Status::WakeupPir),
                Event::Status(Status::Active),
            ]
        );
    }

    #[test]
    fn test_frames_use_brightness_ceiling() {
        let mut light = booted(SimBoard::new(0, &[]));
        assert_eq!(
            light.poll(),
            Cycle::Frame {
                at: Instant::from_millis(0)
            }
        );

        let mut expected = [Rgb::default(); N];
        FlameEffect::default().render(Instant::from_millis(0), &mut expected);
        BrightnessFilter::new(150).apply(&mut expected);

        assert_eq!(light.frame(), &expected);
        assert_eq!(light.board().last_write, expected.to_vec());
        assert_eq!(light.board().frames_written(), 1);
        assert_eq!(light.board().now_ms, 20);
    }

    #[test]
    fn test_custom_effect() {
        struct Solid;

        impl Effect for Solid {
            fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
                leds.fill(Rgb::new(255, 255, 255));
            }
        }

        let config = MotionLightConfig {
            brightness: 255,
            ..config()
        };
        let mut light: MotionLight<SimBoard, Solid, 4> =
            MotionLight::with_effect(SimBoard::new(0, &[]), Solid, config)
                .expect("valid config");
        light.boot(ResetCause::PowerOn);
        light.poll();
        assert_eq!(light.frame(), &[Rgb::new(255, 255, 255); 4]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = MotionLightConfig::DEFAULT.with_keep_alive(Duration::from_millis(0));
        let result: Result<MotionLight<SimBoard, FlameEffect, N>, _> =
            MotionLight::new(SimBoard::new(0, &[]), config);
        assert_eq!(result.err(), Some(ConfigError::ZeroKeepAlive));
    }
}
