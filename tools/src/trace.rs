//! Record-by-record trace of a stitch stream.

use std::fmt;

use decoder::{ColorOrder, DecodeResult, Point, RecordKind, StitchDecoder};
use format::StitchReader;

/// One traced record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    pub index: u64,
    pub command: u8,
    pub kind: RecordKind,
    pub dx: i32,
    pub dy: i32,
    pub position: Point,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, DX: {}, DY: {}, Position: ({}, {})",
            self.kind.label(),
            self.dx,
            self.dy,
            self.position.x,
            self.position.y
        )
    }
}

/// Walks every record of `bytes`, reporting how each one moves the needle.
pub fn trace_lines(bytes: &[u8], order: &ColorOrder) -> DecodeResult<Vec<TraceLine>> {
    let mut reader = StitchReader::open(bytes)?;
    let mut decoder = StitchDecoder::new(order);
    let mut lines = Vec::new();
    let mut index = 0;
    while let Some(record) = reader.next_record()? {
        let step = decoder.feed(record);
        lines.push(TraceLine {
            index,
            command: record.command.raw(),
            kind: step.kind,
            dx: step.dx,
            dy: step.dy,
            position: step.position,
        });
        index += 1;
    }
    Ok(lines)
}
