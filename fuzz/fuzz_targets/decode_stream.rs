#![no_main]

use decoder::{decode_bytes, ColorOrder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the color order length so cycling is exercised too.
    let Some((&order_len, body)) = data.split_first() else {
        return;
    };
    let indices: Vec<u8> = (0..=order_len % 16).collect();
    let order = ColorOrder::from_indices(&indices).expect("order is non-empty");

    let decoded = decode_bytes(body, &order).expect("slices never fail to read");

    let jumps = decoded.actions.iter().filter(|action| action.is_jump()).count();
    assert_eq!(jumps, decoded.polylines.len());
    assert_eq!(decoded.actions.len(), decoded.point_count());
    for polyline in &decoded.polylines {
        assert!(polyline.points.len() >= 2);
    }
});
