//! 8-bit coherent noise
//!
//! A two-dimensional Perlin noise field evaluated entirely in 8-bit
//! fixed point. Coordinates are 8.8 fixed point: the high byte selects the
//! lattice cell and the low byte is the position inside it. The field is a
//! pure function of its coordinates, so the same `(x, y)` always yields the
//! same sample.

use crate::math8::{avg7, ease8_in_out_quad, lerp7by8, qadd8};

/// Ken Perlin's reference permutation.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
const fn perm(index: u8) -> u8 {
    PERMUTATION[index as usize]
}

/// Gradient contribution for one lattice corner
#[inline]
const fn grad8(hash: u8, x: i8, y: i8) -> i8 {
    let (mut u, mut v) = if hash & 4 != 0 { (y, x) } else { (x, y) };
    if hash & 1 != 0 {
        u = u.wrapping_neg();
    }
    if hash & 2 != 0 {
        v = v.wrapping_neg();
    }
    avg7(u, v)
}

/// Raw signed noise sample in `-65..=65`
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
pub const fn inoise8_raw(x: u16, y: u16) -> i8 {
    let cell_x = (x >> 8) as u8;
    let cell_y = (y >> 8) as u8;

    let a = perm(cell_x).wrapping_add(cell_y);
    let aa = perm(a);
    let ab = perm(a.wrapping_add(1));
    let b = perm(cell_x.wrapping_add(1)).wrapping_add(cell_y);
    let ba = perm(b);
    let bb = perm(b.wrapping_add(1));

    // Position inside the cell, halved to fit signed 7-bit gradients
    let xx = ((x as u8) >> 1) as i8;
    let yy = ((y as u8) >> 1) as i8;
    let xx1 = (xx as i16 - 0x80) as i8;
    let yy1 = (yy as i16 - 0x80) as i8;

    let u = ease8_in_out_quad(x as u8);
    let v = ease8_in_out_quad(y as u8);

    let x1 = lerp7by8(grad8(perm(aa), xx, yy), grad8(perm(ba), xx1, yy), u);
    let x2 = lerp7by8(grad8(perm(ab), xx, yy1), grad8(perm(bb), xx1, yy1), u);
    lerp7by8(x1, x2, v)
}

/// Noise sample scaled to the full `0..=255` range
#[allow(
    clippy::cast_lossless,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub const fn inoise8(x: u16, y: u16) -> u8 {
    // Rounding can push the raw sample one step past +-64; at -65 the
    // scaled value would wrap to 255, so clamp first
    let mut raw = inoise8_raw(x, y);
    if raw < -64 {
        raw = -64;
    } else if raw > 64 {
        raw = 64;
    }
    let n = (raw as i16 + 64) as u8;
    qadd8(n, n)
}
