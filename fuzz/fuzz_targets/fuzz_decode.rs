#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic. Limits keep hostile
    // header dimensions from turning into huge allocations.
    let limits = bmphalf::Limits {
        max_memory_bytes: Some(1 << 26),
        ..Default::default()
    };
    let _ = bmphalf::decode(data, Some(&limits));
});
