//! Sequential record reader over any byte source.

use std::io::{self, Read};

use crate::error::FormatResult;
use crate::header::{RawHeader, HEADER_SIZE};
use crate::record::{Record, RECORD_SIZE};

/// Reads the header and then one record at a time from a byte source.
///
/// The reader owns its source, so a file handed to [`StitchReader::open`]
/// is closed whenever the reader is dropped, including on error paths.
#[derive(Debug)]
pub struct StitchReader<R> {
    inner: R,
    header: Option<RawHeader>,
    finished: bool,
    records_read: u64,
    trailing_bytes: usize,
}

impl<R: Read> StitchReader<R> {
    /// Consumes the header from `inner`.
    ///
    /// A source shorter than [`HEADER_SIZE`] is not an error: the reader
    /// has no header and yields no records.
    pub fn open(mut inner: R) -> FormatResult<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        let filled = read_full(&mut inner, &mut buf)?;
        let header = (filled == HEADER_SIZE).then(|| RawHeader::new(buf));
        Ok(Self {
            inner,
            finished: header.is_none(),
            header,
            records_read: 0,
            trailing_bytes: 0,
        })
    }

    /// Returns the header, if the source was long enough to contain one.
    #[must_use]
    pub const fn header(&self) -> Option<&RawHeader> {
        self.header.as_ref()
    }

    /// Number of complete records returned so far.
    #[must_use]
    pub const fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Bytes left over after the last complete record (0 to 2).
    ///
    /// Only meaningful once the reader has returned `Ok(None)`.
    #[must_use]
    pub const fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// Returns `true` once the end of the record stream has been reached.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` at the end of the stream, which includes a final
    /// record cut short by the end of the file.
    pub fn next_record(&mut self) -> FormatResult<Option<Record>> {
        if self.finished {
            return Ok(None);
        }
        let mut buf = [0u8; RECORD_SIZE];
        let filled = read_full(&mut self.inner, &mut buf)?;
        if filled < RECORD_SIZE {
            self.finished = true;
            self.trailing_bytes = filled;
            return Ok(None);
        }
        self.records_read += 1;
        Ok(Some(Record::from_bytes(buf)))
    }

    /// Releases the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for StitchReader<R> {
    type Item = FormatResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Fills as much of `buf` as the source allows, retrying interrupted reads.
fn read_full<R: Read>(inner: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match inner.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
