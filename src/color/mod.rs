use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fill the whole frame with black
pub fn clear(leds: &mut [Rgb]) {
    leds.fill(BLACK);
}

/// Check whether every LED in the frame is off
pub fn is_dark(leds: &[Rgb]) -> bool {
    leds.iter().all(|led| *led == BLACK)
}
