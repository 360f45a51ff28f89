//! Path-level load and store.
//!
//! Read-all / write-all semantics: the whole file goes through memory, and
//! I/O failures surface as [`BmpError::Io`].

use std::path::Path;

use crate::bitmap::Bitmap;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::BmpError;

/// Read and decode the BMP file at `path`.
pub fn load_path(path: impl AsRef<Path>) -> Result<Bitmap, BmpError> {
    let data = std::fs::read(path)?;
    decode(&data, None)
}

/// Encode `bitmap` and write it to `path`, replacing any existing file.
pub fn store_path(bitmap: &Bitmap, path: impl AsRef<Path>) -> Result<(), BmpError> {
    std::fs::write(path, encode(bitmap)?)?;
    Ok(())
}
