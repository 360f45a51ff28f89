#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = bmphalf::Limits {
        max_memory_bytes: Some(1 << 26),
        ..Default::default()
    };
    let Ok(bitmap) = bmphalf::decode(data, Some(&limits)) else {
        return;
    };

    // Whatever decodes must re-encode and decode to the same pixels.
    let Ok(reencoded) = bmphalf::encode(&bitmap) else {
        return;
    };
    let Ok(bitmap2) = bmphalf::decode(&reencoded, None) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(bitmap.pixels().bytes(), bitmap2.pixels().bytes());
    assert_eq!(bitmap.width(), bitmap2.width());
    assert_eq!(bitmap.height(), bitmap2.height());

    // Shrinking must never panic either; failure is only allowed for
    // unsupported bit depths.
    if matches!(bitmap.bits_per_pixel(), 24 | 32) {
        let _ = bmphalf::shrink_half(&bitmap);
    }
});
