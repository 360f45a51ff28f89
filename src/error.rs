/// Errors from BMP decoding, encoding, and downsampling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a bitmap: missing BM signature")]
    NotABitmap,

    #[error("unsupported BMP header variant: info header size {0}")]
    UnsupportedHeaderVariant(u32),

    #[error("unsupported bit depth: {0} bits per pixel (only 24 and 32 are supported)")]
    UnsupportedBitDepth(u16),

    #[error("truncated file: need {needed} bytes of pixel data, got {actual}")]
    TruncatedFile { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
