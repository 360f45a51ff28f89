//! Codec tests: byte-exact round trips, header variants, rejection cases.

use bmphalf::{BmpError, InfoHeader, Limits, decode, encode, row_stride};

/// Build a minimal BMP with a 40-byte info header. `rows` holds the pixel
/// payload in stored order, already padded to the scanline stride.
fn build_v2(width: u32, height: u32, bpp: u16, rows: &[u8]) -> Vec<u8> {
    let offset = 54u32;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + rows.len() as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&offset.to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(rows.len() as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    out.extend_from_slice(rows);
    out
}

/// Same, with the legacy 12-byte core header.
fn build_core(width: u16, height: u16, bpp: u16, rows: &[u8]) -> Vec<u8> {
    let offset = 26u32;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + rows.len() as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&offset.to_le_bytes());

    out.extend_from_slice(&12u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bpp.to_le_bytes());

    out.extend_from_slice(rows);
    out
}

#[test]
fn scanline_stride_values() {
    assert_eq!(row_stride(10, 24), 32);
    assert_eq!(row_stride(1, 24), 4);
    assert_eq!(row_stride(3, 24), 12);
    assert_eq!(row_stride(5, 32), 20);
    assert_eq!(row_stride(0, 24), 0);
}

#[test]
fn v2_24bit_roundtrip_is_byte_exact() {
    // 3x2, stride 12: 9 pixel bytes + 3 padding per row.
    let rows = [
        10, 20, 30, 40, 50, 60, 70, 80, 90, 0, 0, 0, // stored row 0
        11, 21, 31, 41, 51, 61, 71, 81, 91, 0, 0, 0, // stored row 1
    ];
    let original = build_v2(3, 2, 24, &rows);

    let bitmap = decode(&original, None).unwrap();
    assert_eq!(bitmap.width(), 3);
    assert_eq!(bitmap.height(), 2);
    assert_eq!(bitmap.bits_per_pixel(), 24);
    assert_eq!(bitmap.stride(), 12);
    assert_eq!(bitmap.pixels().bytes(), &rows);

    let reencoded = encode(&bitmap).unwrap();
    assert_eq!(&reencoded[0..2], b"BM");
    assert_eq!(reencoded, original);
}

#[test]
fn v2_32bit_roundtrip_preserves_alpha() {
    let rows = [
        1, 2, 3, 128, 5, 6, 7, 0, // stored row 0: two BGRA pixels
        9, 10, 11, 255, 13, 14, 15, 64, // stored row 1
    ];
    let original = build_v2(2, 2, 32, &rows);

    let bitmap = decode(&original, None).unwrap();
    let px = bitmap.get_pixel(0, 0).unwrap();
    assert_eq!((px.b, px.g, px.r, px.a), (1, 2, 3, 128));

    assert_eq!(encode(&bitmap).unwrap(), original);
}

#[test]
fn core_header_roundtrip() {
    // 1x1 at 24bpp: stride 4.
    let rows = [200, 100, 50, 0];
    let original = build_core(1, 1, 24, &rows);

    let bitmap = decode(&original, None).unwrap();
    assert!(matches!(bitmap.info_header(), InfoHeader::Core(_)));
    assert_eq!(bitmap.width(), 1);
    assert_eq!(bitmap.height(), 1);
    let px = bitmap.get_pixel(0, 0).unwrap();
    assert_eq!((px.b, px.g, px.r, px.a), (200, 100, 50, 0));

    assert_eq!(encode(&bitmap).unwrap(), original);
}

#[test]
fn os2_64_byte_header_tail_survives_roundtrip() {
    // Hand-build a 64-byte info header whose trailing 24 bytes are nonzero.
    let rows = [1u8, 2, 3, 4]; // 1x1 at 32bpp
    let offset = 14 + 64u32;
    let mut original = Vec::new();
    original.extend_from_slice(b"BM");
    original.extend_from_slice(&(offset + rows.len() as u32).to_le_bytes());
    original.extend_from_slice(&[0u8; 4]);
    original.extend_from_slice(&offset.to_le_bytes());
    original.extend_from_slice(&64u32.to_le_bytes());
    original.extend_from_slice(&1u32.to_le_bytes()); // width
    original.extend_from_slice(&1u32.to_le_bytes()); // height
    original.extend_from_slice(&1u16.to_le_bytes());
    original.extend_from_slice(&32u16.to_le_bytes());
    original.extend_from_slice(&0u32.to_le_bytes()); // compression
    original.extend_from_slice(&(rows.len() as u32).to_le_bytes());
    original.extend_from_slice(&[0u8; 16]); // resolutions, color counts
    original.extend_from_slice(&[0xAB; 24]); // OS/2 tail
    original.extend_from_slice(&rows);

    let bitmap = decode(&original, None).unwrap();
    assert_eq!(bitmap.info_header().header_size(), 64);
    assert_eq!(encode(&bitmap).unwrap(), original);
}

#[test]
fn rejects_non_bitmap_signature() {
    let mut data = build_v2(1, 1, 24, &[0, 0, 0, 0]);
    data[0] = b'P';
    assert!(matches!(
        decode(&data, None),
        Err(BmpError::NotABitmap)
    ));
}

#[test]
fn rejects_bitmapv4_header() {
    let mut data = build_v2(1, 1, 24, &[0, 0, 0, 0]);
    data[14..18].copy_from_slice(&108u32.to_le_bytes());
    assert!(matches!(
        decode(&data, None),
        Err(BmpError::UnsupportedHeaderVariant(108))
    ));
}

#[test]
fn rejects_truncated_pixel_data() {
    let data = build_v2(3, 2, 24, &[0u8; 24]);
    let short = &data[..data.len() - 5];
    match decode(short, None) {
        Err(BmpError::TruncatedFile { needed, actual }) => {
            assert_eq!(needed, 54 + 24);
            assert_eq!(actual, short.len());
        }
        other => panic!("expected TruncatedFile, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_are_ignored() {
    let rows = [9u8; 4];
    let mut data = build_v2(1, 1, 24, &rows);
    let clean_len = data.len();
    data.extend_from_slice(&[0xFF; 37]);

    let bitmap = decode(&data, None).unwrap();
    assert_eq!(bitmap.pixels().bytes(), &rows);
    // Re-encoding drops whatever followed the declared image size.
    assert_eq!(encode(&bitmap).unwrap().len(), clean_len);
}

#[test]
fn pixel_data_offset_is_taken_verbatim() {
    // 16 junk bytes between the headers and the pixel data.
    let rows = [7u8, 8, 9, 0];
    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&(70 + rows.len() as u32).to_le_bytes());
    data.extend_from_slice(&[0u8; 4]);
    data.extend_from_slice(&70u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&[0u8; 24]); // rest of the 40-byte header
    data.extend_from_slice(&[0xEE; 16]); // gap
    data.extend_from_slice(&rows);

    let bitmap = decode(&data, None).unwrap();
    assert_eq!(bitmap.pixels().bytes(), &rows);

    // On encode the offset is re-derived: headers, then pixels, no gap.
    let reencoded = encode(&bitmap).unwrap();
    assert_eq!(reencoded.len(), 54 + 4);
    assert_eq!(&reencoded[54..], &rows);
}

#[test]
fn unsupported_depth_fails_at_pixel_access() {
    // An 8bpp file decodes (the payload is just bytes) but pixel access
    // reports the unsupported depth.
    let rows = [0u8; 4]; // 1x1 at 8bpp: stride 4
    let data = build_v2(1, 1, 8, &rows);
    let bitmap = decode(&data, None).unwrap();
    assert!(matches!(
        bitmap.get_pixel(0, 0),
        Err(BmpError::UnsupportedBitDepth(8))
    ));
}

#[test]
fn limits_reject_large_images() {
    let data = build_v2(3, 2, 24, &[0u8; 24]);
    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };
    match decode(&data, Some(&limits)) {
        Err(BmpError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn hostile_header_geometry_errors_instead_of_overflowing() {
    // Maximal width/height/bpp make stride * height exceed u64. Decode must
    // surface a typed error, with or without a memory limit in place.
    let data = build_v2(u32::MAX, u32::MAX, u16::MAX, &[]);

    let limits = Limits {
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    assert!(matches!(
        decode(&data, Some(&limits)),
        Err(BmpError::DimensionsTooLarge { .. })
    ));
    assert!(matches!(
        decode(&data, None),
        Err(BmpError::DimensionsTooLarge { .. })
    ));
}
