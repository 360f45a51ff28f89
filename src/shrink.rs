//! Gamma-correct 2x box downsampling.

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::gamma::{linear_to_srgb, srgb_to_linear};
use crate::pixel::{Pixel, PixelBuffer};

/// Average a 2x2 block per channel in linear light.
///
/// Alpha goes through the same transform as the color channels. That is an
/// approximation, not alpha compositing, but it is the defined behavior.
fn average_block(samples: [Pixel; 4]) -> Pixel {
    let mut acc = [0.0f64; 4];
    for p in samples {
        acc[0] += srgb_to_linear(p.b);
        acc[1] += srgb_to_linear(p.g);
        acc[2] += srgb_to_linear(p.r);
        acc[3] += srgb_to_linear(p.a);
    }
    Pixel {
        b: linear_to_srgb(acc[0] / 4.0),
        g: linear_to_srgb(acc[1] / 4.0),
        r: linear_to_srgb(acc[2] / 4.0),
        a: linear_to_srgb(acc[3] / 4.0),
    }
}

/// Produce a half-resolution copy of `src`.
///
/// The result is `floor(w/2) x floor(h/2)`; an odd trailing row or column is
/// dropped. Each output pixel is the linear-light mean of its 2x2 source
/// block, re-encoded to sRGB. The output depth matches the source, the pixel
/// buffer is freshly allocated (never aliased), and the carried headers get
/// the halved geometry.
///
/// A 0- or 1-sized source dimension yields a valid empty bitmap. Depths
/// other than 24/32 fail with [`BmpError::UnsupportedBitDepth`] at the
/// first pixel access.
pub fn shrink_half(src: &Bitmap) -> Result<Bitmap, BmpError> {
    let out_width = src.width() / 2;
    let out_height = src.height() / 2;
    let mut pixels = PixelBuffer::allocate(out_width, out_height, src.bits_per_pixel())?;

    for y in 0..out_height {
        for x in 0..out_width {
            let (sx, sy) = (2 * x, 2 * y);
            let block = [
                src.get_pixel(sx, sy)?,
                src.get_pixel(sx + 1, sy)?,
                src.get_pixel(sx, sy + 1)?,
                src.get_pixel(sx + 1, sy + 1)?,
            ];
            pixels.set(x, y, average_block(block))?;
        }
    }

    let mut info = src.info;
    info.set_dimensions(out_width, out_height);
    Ok(Bitmap {
        file: src.file,
        info,
        pixels,
    })
}
