//! The in-memory image: decoded headers plus an owned pixel buffer.

use crate::error::BmpError;
use crate::header::{FILE_HEADER_LEN, FileHeader, InfoHeader, InfoHeaderV2};
use crate::pixel::{Pixel, PixelBuffer};

/// A decoded bitmap.
///
/// Geometry lives in the [`PixelBuffer`]; the header records are carried for
/// round-tripping, and their size/offset fields are recomputed from the live
/// geometry at encode time, never consulted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub(crate) file: FileHeader,
    pub(crate) info: InfoHeader,
    pub(crate) pixels: PixelBuffer,
}

impl Bitmap {
    /// Create a blank bitmap with a standard 40-byte info header.
    ///
    /// `bits_per_pixel` must be 24 or 32; the pixel data is zeroed.
    pub fn with_geometry(width: u32, height: u32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        if bits_per_pixel != 24 && bits_per_pixel != 32 {
            return Err(BmpError::UnsupportedBitDepth(bits_per_pixel));
        }
        let pixels = PixelBuffer::allocate(width, height, bits_per_pixel)?;
        let info = InfoHeader::Info(InfoHeaderV2 {
            header_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel,
            compression: 0,
            image_size: 0,
            // 72 DPI, the conventional default
            x_pixels_per_meter: 2835,
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
            tail: [0u8; 24],
        });
        Ok(Self {
            file: FileHeader::default(),
            info,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.pixels.bits_per_pixel()
    }

    /// Padded byte width of one scanline.
    pub fn stride(&self) -> usize {
        self.pixels.stride()
    }

    /// Byte size of the pixel payload, `stride * height`.
    pub fn image_byte_size(&self) -> usize {
        self.stride() * self.height() as usize
    }

    /// Byte offset the pixel data will have on encode: headers, no color
    /// table, no gap.
    pub fn encoded_pixel_data_offset(&self) -> u32 {
        FILE_HEADER_LEN as u32 + self.info.header_size()
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Read the pixel at `(x, y)`; see [`PixelBuffer::get`].
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel, BmpError> {
        self.pixels.get(x, y)
    }

    /// Write the pixel at `(x, y)`; see [`PixelBuffer::set`].
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), BmpError> {
        self.pixels.set(x, y, pixel)
    }
}
