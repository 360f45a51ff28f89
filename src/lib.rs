//! # bmphalf
//!
//! Decoder and encoder for uncompressed true-color BMP files, paired with a
//! gamma-correct 2x box downsampler.
//!
//! ## Supported input
//!
//! - The 12-byte legacy core info header and the 40/64-byte info header;
//!   any other variant is rejected as [`BmpError::UnsupportedHeaderVariant`]
//! - 24-bit BGR and 32-bit BGRA pixel data (uncompressed)
//!
//! ## Non-goals
//!
//! - RLE or JPEG/PNG-in-BMP compression
//! - Color-mapped (palette) images, bit depths other than 24/32
//! - Color management beyond the fixed sRGB curve used for downsampling
//!
//! ## Downsampling
//!
//! [`shrink_half`] averages each 2x2 block per channel in *linear light*
//! rather than on the gamma-encoded bytes, so the half-size image keeps the
//! perceived brightness of the original. See
//! <http://www.ericbrasseur.org/gamma.html> for why naive averaging is wrong.
//!
//! ## Usage
//!
//! ```no_run
//! let bitmap = bmphalf::load_path("photo.bmp")?;
//! let half = bmphalf::shrink_half(&bitmap)?;
//! bmphalf::store_path(&half, "photo.bmp.half.bmp")?;
//! # Ok::<(), bmphalf::BmpError>(())
//! ```
//!
//! Byte-level entry points [`decode`] and [`encode`] are available when the
//! bytes come from somewhere other than a file.

#![forbid(unsafe_code)]

mod bitmap;
mod decode;
mod encode;
mod error;
pub mod gamma;
mod header;
mod limits;
mod pixel;
mod shrink;

mod file;

pub use bitmap::Bitmap;
pub use decode::decode;
pub use encode::encode;
pub use error::BmpError;
pub use file::{load_path, store_path};
pub use header::{CoreHeader, FILE_HEADER_LEN, FileHeader, InfoHeader, InfoHeaderV2};
pub use limits::Limits;
pub use pixel::{Pixel, PixelBuffer, row_stride};
pub use shrink::shrink_half;
