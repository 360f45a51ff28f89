//! Decoding a byte stream into a [`Bitmap`].

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::{FILE_HEADER_LEN, FileHeader, InfoHeader};
use crate::limits::Limits;
use crate::pixel::{PixelBuffer, row_stride};

/// Decode a complete BMP byte stream.
///
/// Reads the file header, dispatches on the info header variant, derives
/// the geometry, and copies exactly `stride * height` bytes starting at the
/// file's declared pixel data offset. Trailing bytes beyond the declared
/// image size are ignored. Short input fails with
/// [`BmpError::TruncatedFile`]; no partial bitmap is ever returned.
pub fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap, BmpError> {
    let file = FileHeader::from_bytes(data)?;
    let (info, _info_len) = InfoHeader::from_bytes(&data[FILE_HEADER_LEN..])?;

    let width = info.width();
    let height = info.height();
    let bits_per_pixel = info.bits_per_pixel();

    if let Some(limits) = limits {
        limits.check(width, height)?;
        let payload = row_stride(width, bits_per_pixel)
            .checked_mul(u64::from(height))
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        limits.check_memory(payload)?;
    }

    let mut pixels = PixelBuffer::allocate(width, height, bits_per_pixel)?;
    let image_size = pixels.bytes().len();

    // Offset taken verbatim from the file, not re-derived: real files may
    // put a color table or gap between the headers and the pixel data.
    let offset = file.pixel_data_offset as usize;
    let end = offset
        .checked_add(image_size)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if data.len() < end {
        return Err(BmpError::TruncatedFile {
            needed: end,
            actual: data.len(),
        });
    }
    pixels.bytes_mut().copy_from_slice(&data[offset..end]);

    Ok(Bitmap { file, info, pixels })
}
