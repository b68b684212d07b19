//! The single-pass stitch decoder.

use std::fs::File;
use std::io::{BufReader, Read};
use std::mem;
use std::path::Path;

use format::{HeaderInfo, Record, RecordKind, StitchReader};
use tracing::{debug, trace};

use crate::actions::build_actions;
use crate::error::DecodeResult;
use crate::palette::{ColorCycle, ColorOrder};
use crate::types::{Bounds, DecodeStats, Decoded, Point, Polyline};

/// What one record did, as seen by [`StitchDecoder::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// How the record was classified.
    pub kind: RecordKind,
    /// Signed X movement.
    pub dx: i32,
    /// Signed Y movement.
    pub dy: i32,
    /// Needle position after the record.
    pub position: Point,
}

/// Incremental decoder state.
///
/// Feed records in file order, then call [`finish`](Self::finish). The
/// needle starts at the origin and the first run is seeded there.
#[derive(Debug)]
pub struct StitchDecoder<'a> {
    cycle: ColorCycle<'a>,
    position: Point,
    run: Vec<Point>,
    polylines: Vec<Polyline>,
    stats: DecodeStats,
}

impl<'a> StitchDecoder<'a> {
    #[must_use]
    pub fn new(order: &'a ColorOrder) -> Self {
        Self {
            cycle: ColorCycle::new(order),
            position: Point::ORIGIN,
            run: vec![Point::ORIGIN],
            polylines: Vec::new(),
            stats: DecodeStats::default(),
        }
    }

    /// Current needle position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Number of color changes seen so far.
    #[must_use]
    pub const fn color_changes(&self) -> u64 {
        self.cycle.changes()
    }

    /// Applies one record.
    pub fn feed(&mut self, record: Record) -> Step {
        let (dx, dy) = record.delta();
        let next = self.position.offset(dx, dy);
        let kind = record.kind();

        match kind {
            RecordKind::ColorChange => {
                self.close_run();
                self.cycle.advance();
                self.run.push(next);
                self.stats.color_changes += 1;
            }
            RecordKind::Jump => {
                self.close_run();
                self.run.push(next);
                self.stats.jumps += 1;
            }
            RecordKind::Stitch => {
                self.run.push(next);
                self.stats.stitches += 1;
            }
        }

        match self.stats.bounds.as_mut() {
            Some(bounds) => bounds.include(next),
            None => {
                let mut bounds = Bounds::at(self.position);
                bounds.include(next);
                self.stats.bounds = Some(bounds);
            }
        }
        self.stats.records += 1;
        self.position = next;

        trace!(
            kind = kind.label(),
            dx,
            dy,
            x = next.x,
            y = next.y,
            "record"
        );

        Step {
            kind,
            dx,
            dy,
            position: next,
        }
    }

    /// Closes the last run and derives the playback actions.
    #[must_use]
    pub fn finish(mut self) -> Decoded {
        self.close_run();
        let actions = build_actions(&self.polylines);
        debug!(
            records = self.stats.records,
            stitches = self.stats.stitches,
            jumps = self.stats.jumps,
            color_changes = self.stats.color_changes,
            polylines = self.polylines.len(),
            actions = actions.len(),
            "decoded stitch stream"
        );
        Decoded {
            polylines: self.polylines,
            actions,
            stats: self.stats,
        }
    }

    // A run of a single seed point had no stitch after it and is dropped.
    fn close_run(&mut self) {
        let points = mem::take(&mut self.run);
        if points.len() >= 2 {
            self.polylines.push(Polyline {
                color: self.cycle.current(),
                points,
            });
        }
    }
}

/// Decodes a stitch stream: skips the header, then turns every record into
/// polylines and playback actions.
///
/// Input shorter than the header, or ending part-way through a record, is
/// decoded up to the last complete record. An I/O error aborts the decode
/// and nothing is returned.
pub fn decode<R: Read>(source: R, order: &ColorOrder) -> DecodeResult<Decoded> {
    let mut reader = StitchReader::open(source)?;
    decode_records(&mut reader, order)
}

/// Decodes the remaining records of an already opened reader.
pub fn decode_records<R: Read>(
    reader: &mut StitchReader<R>,
    order: &ColorOrder,
) -> DecodeResult<Decoded> {
    let mut decoder = StitchDecoder::new(order);
    while let Some(record) = reader.next_record()? {
        decoder.feed(record);
    }
    let mut decoded = decoder.finish();
    decoded.stats.trailing_bytes = reader.trailing_bytes();
    if decoded.stats.trailing_bytes > 0 {
        debug!(
            trailing_bytes = decoded.stats.trailing_bytes,
            "ignored truncated trailing record"
        );
    }
    Ok(decoded)
}

/// Decodes an in-memory stitch file.
pub fn decode_bytes(bytes: &[u8], order: &ColorOrder) -> DecodeResult<Decoded> {
    decode(bytes, order)
}

/// Opens and decodes a stitch file, returning its header metadata as well.
///
/// The header is `None` when the file is shorter than a header.
pub fn decode_file(
    path: impl AsRef<Path>,
    order: &ColorOrder,
) -> DecodeResult<(Option<HeaderInfo>, Decoded)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = StitchReader::open(BufReader::new(file))?;
    let header = reader.header().map(format::RawHeader::info);
    let decoded = decode_records(&mut reader, order)?;
    debug!(path = %path.display(), polylines = decoded.polylines.len(), "decoded file");
    Ok((header, decoded))
}
