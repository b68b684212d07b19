#![no_main]

use format::{HeaderInfo, StitchReader, HEADER_SIZE, RECORD_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = HeaderInfo::parse(data);

    let mut reader = StitchReader::open(data).expect("slices never fail to read");
    let mut count = 0usize;
    while let Some(record) = reader.next_record().expect("slices never fail to read") {
        let _ = record.delta();
        let _ = record.kind();
        count += 1;
    }

    let body = data.len().saturating_sub(HEADER_SIZE);
    if data.len() >= HEADER_SIZE {
        assert_eq!(count, body / RECORD_SIZE);
        assert_eq!(reader.trailing_bytes(), body % RECORD_SIZE);
    } else {
        assert_eq!(count, 0);
    }
});
