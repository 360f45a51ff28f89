//! Scanline-padded pixel storage with typed per-pixel access.

use crate::error::BmpError;

/// One pixel in BMP channel order.
///
/// 24-bit pixels carry an implicit zero alpha; 32-bit pixels store all four
/// channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    /// An RGB pixel with zero alpha, the 24-bit convention.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

/// Padded byte width of one scanline: rows round up to 4-byte multiples.
pub fn row_stride(width: u32, bits_per_pixel: u16) -> u64 {
    (u64::from(bits_per_pixel) * u64::from(width)).div_ceil(32) * 4
}

/// An owned, contiguous pixel byte region addressed by `(x, y)`.
///
/// Rows are kept in stored (file) order, so `y = 0` is the bottom scanline
/// of a bottom-up BMP. Both accessors and the downsampler use this
/// convention, which keeps decode and encode copy-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    bits_per_pixel: u16,
    stride: usize,
}

impl PixelBuffer {
    /// Allocate a zero-initialized buffer of `stride * height` bytes.
    ///
    /// Any bit depth may be stored; only access through [`get`](Self::get) /
    /// [`set`](Self::set) requires 24 or 32 bits per pixel.
    pub fn allocate(width: u32, height: u32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        let stride = row_stride(width, bits_per_pixel);
        let total = stride
            .checked_mul(u64::from(height))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let stride =
            usize::try_from(stride).map_err(|_| BmpError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            data: vec![0u8; total],
            width,
            height,
            bits_per_pixel,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Padded byte width of one row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw scanline-padded bytes, `stride * height` long.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn bytes_per_pixel(&self) -> Result<usize, BmpError> {
        match self.bits_per_pixel {
            24 => Ok(3),
            32 => Ok(4),
            other => Err(BmpError::UnsupportedBitDepth(other)),
        }
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Fails with [`BmpError::UnsupportedBitDepth`] unless the depth is 24
    /// or 32. Coordinates are the caller's responsibility; out-of-range
    /// values panic.
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel, BmpError> {
        let bpp = self.bytes_per_pixel()?;
        let off = y as usize * self.stride + x as usize * bpp;
        let px = &self.data[off..off + bpp];
        Ok(Pixel {
            b: px[0],
            g: px[1],
            r: px[2],
            a: if bpp == 4 { px[3] } else { 0 },
        })
    }

    /// Write the pixel at `(x, y)`. The alpha channel is dropped at 24-bit
    /// depth. Same depth and bounds contract as [`get`](Self::get).
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), BmpError> {
        let bpp = self.bytes_per_pixel()?;
        let off = y as usize * self.stride + x as usize * bpp;
        let px = &mut self.data[off..off + bpp];
        px[0] = pixel.b;
        px[1] = pixel.g;
        px[2] = pixel.r;
        if bpp == 4 {
            px[3] = pixel.a;
        }
        Ok(())
    }
}
