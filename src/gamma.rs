//! sRGB gamma transfer functions.
//!
//! Channel bytes in a BMP are gamma-encoded; averaging them directly darkens
//! the result. The downsampler converts to linear light, averages there, and
//! converts back. Curve constants follow IEC 61966-2-1.

use std::sync::LazyLock;

/// `srgb_to_linear` evaluated at every byte value.
static TO_LINEAR: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut table = [0.0; 256];
    for (v, entry) in table.iter_mut().enumerate() {
        *entry = srgb_to_linear_exact(v as u8);
    }
    table
});

fn srgb_to_linear_exact(value: u8) -> f64 {
    let s = f64::from(value) / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a gamma-encoded channel byte to a linear-light fraction in `[0, 1]`.
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    TO_LINEAR[usize::from(value)]
}

/// Convert a linear-light fraction back to a gamma-encoded channel byte.
///
/// Input is clamped to `[0, 1]` before quantization, so out-of-range values
/// saturate rather than wrap.
#[inline]
pub fn linear_to_srgb(s: f64) -> u8 {
    let q = if s <= 0.0031308 {
        12.92 * s
    } else {
        1.055 * s.powf(1.0 / 2.4) - 0.055
    };
    (q.clamp(0.0, 1.0) * 255.0).round() as u8
}
