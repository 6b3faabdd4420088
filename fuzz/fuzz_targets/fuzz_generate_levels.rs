#![no_main]

use libfuzzer_sys::fuzz_target;

use gann_core::{generate_levels, LevelParams, FULL_CIRCLE};

fuzz_target!(|data: &[u8]| {
    if data.len() < 26 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i..i + 8]);
        f64::from_le_bytes(bytes)
    };
    let base = word(0);
    let factor = word(8);
    let tolerance = word(16);
    // Level count capped at 1024 for speed
    let levels = u32::from(u16::from_le_bytes([data[24], data[25]])) % 1024;

    let params = LevelParams::new(base, factor, levels, tolerance);

    // Invalid parameters must be rejected, never panic
    let Ok(result) = generate_levels(&params) else {
        return;
    };
    assert_eq!(result.records.len(), levels as usize);
    for record in &result.records {
        assert!((0.0..FULL_CIRCLE).contains(&record.up.degree));
        assert!((0.0..FULL_CIRCLE).contains(&record.down.degree));
    }
});
