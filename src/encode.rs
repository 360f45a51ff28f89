//! Serializing a [`Bitmap`] back to the on-disk layout.

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::InfoHeader;

/// Encode a bitmap to its BMP wire form.
///
/// The in-memory geometry is authoritative: `pixel_data_offset`,
/// `file_size`, the info header dimensions, and (for the 40/64-byte
/// variant) `image_size` are all recomputed here before serialization.
/// Headers are followed immediately by the pixel buffer, with no color
/// table and no gap.
///
/// Fails with [`BmpError::DimensionsTooLarge`] when the pixel payload does
/// not fit the format's 32-bit size fields.
pub fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, BmpError> {
    let image_size = bitmap.image_byte_size();
    let offset = bitmap.encoded_pixel_data_offset();
    let file_size = encoded_file_size(offset, image_size, bitmap.width(), bitmap.height())?;

    let mut file = bitmap.file;
    file.pixel_data_offset = offset;
    file.file_size = file_size;

    let mut info = bitmap.info;
    info.set_dimensions(bitmap.width(), bitmap.height());
    if let InfoHeader::Info(h) = &mut info {
        h.image_size = image_size as u32;
    }

    let mut out = Vec::with_capacity(offset as usize + image_size);
    file.write_to(&mut out);
    info.write_to(&mut out);
    out.extend_from_slice(bitmap.pixels().bytes());
    Ok(out)
}

/// Total file length, checked against the 32-bit field width.
fn encoded_file_size(
    offset: u32,
    image_size: usize,
    width: u32,
    height: u32,
) -> Result<u32, BmpError> {
    u32::try_from(image_size)
        .ok()
        .and_then(|n| offset.checked_add(n))
        .ok_or(BmpError::DimensionsTooLarge { width, height })
}
