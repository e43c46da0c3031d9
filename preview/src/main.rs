//! Desktop simulator for myrtio-motion-light
//!
//! Runs the real controller on a background thread against a simulated
//! board: the strip is drawn in a window, the PIR line is driven from the UI
//! and light sleep blocks the controller thread until the line goes high.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use eframe::egui::{self};
use myrtio_motion_light::{
    Clock, DEFAULT_LED_COUNT, Duration, EmbassyClock, Instant, MotionInput, MotionLight,
    MotionLightConfig, OutputDriver, PowerControl, ResetCause, Rgb, SharedMotionLine, Status,
    StatusDisplay, config::KEEP_ALIVE_SHORT,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = DEFAULT_LED_COUNT;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 18.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// How long a "wave" keeps the PIR line high
const WAVE_DURATION: StdDuration = StdDuration::from_millis(2_000);

/// How often the sleeping controller checks the wake source
const WAKE_POLL: StdDuration = StdDuration::from_millis(5);

/// Number of status lines kept for display
const STATUS_HISTORY: usize = 6;

/// PIR line shared between the UI and the controller thread
static MOTION_LINE: SharedMotionLine = SharedMotionLine::new();

/// Board state observed by the UI
struct BoardView {
    frame: [Rgb; LED_COUNT],
    status: Vec<&'static str>,
    sleeping: bool,
    wake_armed: bool,
    sensor_power: bool,
    sleeps: u32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            frame: [Rgb::default(); LED_COUNT],
            status: Vec::new(),
            sleeping: false,
            wake_armed: false,
            sensor_power: false,
            sleeps: 0,
        }
    }
}

type SharedView = Arc<Mutex<BoardView>>;

/// Simulated board driven by the controller thread
struct PreviewBoard {
    clock: EmbassyClock,
    motion: &'static SharedMotionLine,
    view: SharedView,
}

impl PreviewBoard {
    fn with_view(&self, f: impl FnOnce(&mut BoardView)) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut view);
    }
}

impl Clock for PreviewBoard {
    fn now(&mut self) -> Instant {
        self.clock.now()
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(StdDuration::from_millis(duration.as_millis()));
    }
}

impl MotionInput for PreviewBoard {
    fn is_motion(&mut self) -> bool {
        let mut line = self.motion;
        line.is_motion()
    }
}

impl OutputDriver for PreviewBoard {
    fn write(&mut self, colors: &[Rgb]) {
        self.with_view(|view| {
            for (dst, src) in view.frame.iter_mut().zip(colors) {
                *dst = *src;
            }
        });
    }
}

impl PowerControl for PreviewBoard {
    fn set_sensor_power(&mut self, enabled: bool) {
        self.with_view(|view| view.sensor_power = enabled);
    }

    fn arm_motion_wake(&mut self) {
        self.with_view(|view| view.wake_armed = true);
    }

    fn disarm_motion_wake(&mut self) {
        self.with_view(|view| view.wake_armed = false);
    }

    fn light_sleep(&mut self) {
        self.with_view(|view| view.sleeping = true);
        loop {
            let armed = self
                .view
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .wake_armed;
            if armed && self.motion.get() {
                break;
            }
            thread::sleep(WAKE_POLL);
        }
        self.with_view(|view| {
            view.sleeping = false;
            view.sleeps += 1;
        });
    }
}

impl StatusDisplay for PreviewBoard {
    fn show_status(&mut self, status: Status) {
        self.with_view(|view| {
            view.status.push(status.as_str());
            if view.status.len() > STATUS_HISTORY {
                view.status.remove(0);
            }
        });
    }

    fn clear_display(&mut self) {
        self.with_view(|view| view.status.clear());
    }
}

fn main() -> eframe::Result<()> {
    let view = SharedView::default();
    let board = PreviewBoard {
        clock: EmbassyClock,
        motion: &MOTION_LINE,
        view: Arc::clone(&view),
    };

    let config = MotionLightConfig::DEFAULT.with_keep_alive(KEEP_ALIVE_SHORT);
    let light: MotionLight<PreviewBoard, _, LED_COUNT> = MotionLight::new(board, config)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    thread::spawn::<_, ()>(move || light.run(ResetCause::PowerOn));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 320.0])
            .with_title("Motion Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-motion-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(view)))),
    )
}

struct PreviewApp {
    view: SharedView,
    /// PIR held high from the UI
    hold_motion: bool,
    /// End of the current wave pulse
    wave_until: Option<StdInstant>,
}

impl PreviewApp {
    fn new(view: SharedView) -> Self {
        Self {
            view,
            hold_motion: false,
            wave_until: None,
        }
    }

    /// Drive the PIR line from the UI state
    fn update_motion_line(&mut self) {
        if self
            .wave_until
            .is_some_and(|until| StdInstant::now() >= until)
        {
            self.wave_until = None;
        }
        MOTION_LINE.set(self.hold_motion || self.wave_until.is_some());
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_motion_line();

        let (frame, status, sleeping, wake_armed, sensor_power, sleeps) = {
            let view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
            (
                view.frame,
                view.status.clone(),
                view.sleeping,
                view.wake_armed,
                view.sensor_power,
                view.sleeps,
            )
        };

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <MotionControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("👋 Wave").clicked() {
                            self.wave_until = Some(StdInstant::now() + WAVE_DURATION);
                        }
                        ui.checkbox(&mut self.hold_motion, "Hold PIR high");
                    });

                    ui.add_space(4.0);

                    ui.label(format!(
                        "PIR line: {}",
                        if MOTION_LINE.get() { "HIGH" } else { "low" }
                    ));
                });
                // </MotionControls>
                ui.add_space(16.0);
                // <PowerState>
                ui.vertical(|ui| {
                    ui.label(format!(
                        "State: {}",
                        if sleeping { "light sleep" } else { "active" }
                    ));
                    ui.label(format!(
                        "Wake source: {}",
                        if wake_armed { "armed" } else { "disarmed" }
                    ));
                    ui.label(format!(
                        "Sensor rail: {}",
                        if sensor_power { "on" } else { "off" }
                    ));
                    ui.label(format!("Sleep cycles: {sleeps}"));
                });
                // </PowerState>
                ui.add_space(16.0);
                // <StatusDisplay>
                ui.vertical(|ui| {
                    for line in &status {
                        ui.monospace(*line);
                    }
                });
                // </StatusDisplay>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = LED_COUNT.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
