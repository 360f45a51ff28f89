//! BMP header parsing and serialization.
//!
//! Two fixed-layout records open every BMP file: the 14-byte file header and
//! an info header whose layout is selected by its own leading size field.
//! Only the 12-byte core variant and the 40/64-byte info variant are
//! recognized; everything else is rejected as [`BmpError::UnsupportedHeaderVariant`].
//!
//! All multi-byte fields are little-endian on the wire, read and written
//! through `from_le_bytes`/`to_le_bytes` unconditionally so host byte order
//! never enters the picture.

use crate::error::BmpError;

/// Byte length of the file header.
pub const FILE_HEADER_LEN: usize = 14;

const SIGNATURE: [u8; 2] = *b"BM";

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos + N;
        if end > self.data.len() {
            return Err(BmpError::TruncatedFile {
                needed: end,
                actual: self.data.len(),
            });
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(buf)
    }

    fn read_u16_le(&mut self) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.read_fixed::<2>()?))
    }

    fn read_u32_le(&mut self) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.read_fixed::<4>()?))
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte record at the start of every BMP file.
///
/// The `BM` signature is validated on decode and emitted on encode rather
/// than stored. `reserved` is carried verbatim so consistent files
/// round-trip byte-exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileHeader {
    /// Total file length in bytes. Recomputed from live geometry on encode.
    pub file_size: u32,
    /// Four reserved bytes, ignored but preserved.
    pub reserved: [u8; 4],
    /// Byte offset from the start of the file to the pixel data.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Parse the file header from the start of `data`.
    ///
    /// Fails with [`BmpError::NotABitmap`] when the signature is wrong and
    /// [`BmpError::TruncatedFile`] when fewer than 14 bytes are available.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let mut cursor = Cursor::new(data);
        let signature = cursor.read_fixed::<2>()?;
        if signature != SIGNATURE {
            return Err(BmpError::NotABitmap);
        }
        let file_size = cursor.read_u32_le()?;
        let reserved = cursor.read_fixed::<4>()?;
        let pixel_data_offset = cursor.read_u32_le()?;
        Ok(Self {
            file_size,
            reserved,
            pixel_data_offset,
        })
    }

    /// Append the 14-byte wire form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved);
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

// ── Info header variants ────────────────────────────────────────────

/// The legacy 12-byte core header (BITMAPCOREHEADER).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreHeader {
    pub width: u16,
    pub height: u16,
    pub planes: u16,
    pub bits_per_pixel: u16,
}

/// The 40-byte BITMAPINFOHEADER, also accepted at its 64-byte OS/2 length.
///
/// When `header_size` is 64 the 24 trailing bytes are carried verbatim in
/// `tail` and re-emitted on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeaderV2 {
    /// Declared header size: 40 or 64. Preserved on encode.
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// Compression code, carried but never validated; pixel access enforces
    /// the uncompressed 24/32-bit assumption.
    pub compression: u32,
    /// Pixel data byte size. Recomputed from live geometry on encode.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
    /// Trailing bytes of a 64-byte header; all zero otherwise.
    pub tail: [u8; 24],
}

/// Info header, tagged by the decoded size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoHeader {
    /// 12-byte legacy variant.
    Core(CoreHeader),
    /// 40- or 64-byte variant.
    Info(InfoHeaderV2),
}

impl InfoHeader {
    /// Parse the info header that follows the file header.
    ///
    /// `data` must start at file offset 14. Returns the header and the
    /// number of bytes consumed.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize), BmpError> {
        let mut cursor = Cursor::new(data);
        let header_size = cursor.read_u32_le()?;
        let header = match header_size {
            12 => InfoHeader::Core(CoreHeader {
                width: cursor.read_u16_le()?,
                height: cursor.read_u16_le()?,
                planes: cursor.read_u16_le()?,
                bits_per_pixel: cursor.read_u16_le()?,
            }),
            40 | 64 => {
                let width = cursor.read_u32_le()?;
                let height = cursor.read_u32_le()?;
                let planes = cursor.read_u16_le()?;
                let bits_per_pixel = cursor.read_u16_le()?;
                let compression = cursor.read_u32_le()?;
                let image_size = cursor.read_u32_le()?;
                let x_pixels_per_meter = cursor.read_u32_le()?;
                let y_pixels_per_meter = cursor.read_u32_le()?;
                let colors_used = cursor.read_u32_le()?;
                let colors_important = cursor.read_u32_le()?;
                let tail = if header_size == 64 {
                    cursor.read_fixed::<24>()?
                } else {
                    [0u8; 24]
                };
                InfoHeader::Info(InfoHeaderV2 {
                    header_size,
                    width,
                    height,
                    planes,
                    bits_per_pixel,
                    compression,
                    image_size,
                    x_pixels_per_meter,
                    y_pixels_per_meter,
                    colors_used,
                    colors_important,
                    tail,
                })
            }
            other => return Err(BmpError::UnsupportedHeaderVariant(other)),
        };
        Ok((header, cursor.pos))
    }

    /// Append the wire form, `header_size` bytes long, to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            InfoHeader::Core(h) => {
                out.extend_from_slice(&12u32.to_le_bytes());
                out.extend_from_slice(&h.width.to_le_bytes());
                out.extend_from_slice(&h.height.to_le_bytes());
                out.extend_from_slice(&h.planes.to_le_bytes());
                out.extend_from_slice(&h.bits_per_pixel.to_le_bytes());
            }
            InfoHeader::Info(h) => {
                out.extend_from_slice(&h.header_size.to_le_bytes());
                out.extend_from_slice(&h.width.to_le_bytes());
                out.extend_from_slice(&h.height.to_le_bytes());
                out.extend_from_slice(&h.planes.to_le_bytes());
                out.extend_from_slice(&h.bits_per_pixel.to_le_bytes());
                out.extend_from_slice(&h.compression.to_le_bytes());
                out.extend_from_slice(&h.image_size.to_le_bytes());
                out.extend_from_slice(&h.x_pixels_per_meter.to_le_bytes());
                out.extend_from_slice(&h.y_pixels_per_meter.to_le_bytes());
                out.extend_from_slice(&h.colors_used.to_le_bytes());
                out.extend_from_slice(&h.colors_important.to_le_bytes());
                if h.header_size == 64 {
                    out.extend_from_slice(&h.tail);
                }
            }
        }
    }

    /// Declared size of this header on the wire.
    pub fn header_size(&self) -> u32 {
        match self {
            InfoHeader::Core(_) => 12,
            InfoHeader::Info(h) => h.header_size,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            InfoHeader::Core(h) => u32::from(h.width),
            InfoHeader::Info(h) => h.width,
        }
    }

    /// Image height in pixels (scanline count).
    pub fn height(&self) -> u32 {
        match self {
            InfoHeader::Core(h) => u32::from(h.height),
            InfoHeader::Info(h) => h.height,
        }
    }

    /// Declared bits per pixel.
    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            InfoHeader::Core(h) => h.bits_per_pixel,
            InfoHeader::Info(h) => h.bits_per_pixel,
        }
    }

    pub(crate) fn set_dimensions(&mut self, width: u32, height: u32) {
        match self {
            InfoHeader::Core(h) => {
                h.width = width as u16;
                h.height = height as u16;
            }
            InfoHeader::Info(h) => {
                h.width = width;
                h.height = height;
            }
        }
    }
}
