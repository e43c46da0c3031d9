//! 8-bit integer math helpers
//!
//! Fixed-point primitives shared by the noise field and the ember palette.
//! Everything here is `const` and allocation free.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Average of two signed 7-bit values, rounding toward `a`
#[inline]
pub const fn avg7(a: i8, b: i8) -> i8 {
    (a >> 1) + (b >> 1) + (a & 0x1)
}

/// Linear interpolation between two signed 7-bit values
///
/// `frac` is the fraction of the way from `a` to `b` (0-255).
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub const fn lerp7by8(a: i8, b: i8, frac: u8) -> i8 {
    if b > a {
        let delta = (b as i16 - a as i16) as u8;
        let scaled = scale8(delta, frac);
        (a as i16 + scaled as i16) as i8
    } else {
        let delta = (a as i16 - b as i16) as u8;
        let scaled = scale8(delta, frac);
        (a as i16 - scaled as i16) as i8
    }
}

/// Ease in out quadratic
pub const fn ease8_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Linearly remap a full-range 8-bit value into `out_min..=out_max`
///
/// `0` maps to `out_min` and `255` maps to `out_max` exactly; values in
/// between are truncated toward `out_min`. Requires `out_min <= out_max`,
/// otherwise `out_min` is returned unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn remap8(value: u8, out_min: u8, out_max: u8) -> u8 {
    if out_max <= out_min {
        return out_min;
    }
    let span = (out_max - out_min) as u16;
    out_min + ((value as u16 * span) / 255) as u8
}
