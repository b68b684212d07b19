//! On-disk layout of DSB embroidery stitch files.
//!
//! A stitch file is a fixed 512-byte header followed by a flat sequence of
//! 3-byte records. This crate knows how to split a byte stream into those
//! pieces and how to read the flag bits of each command byte. It does not
//! know about polylines or colors; that policy lives in the decoder.
//!
//! # Design Principles
//!
//! - **Total decoding** - Every command byte is a valid command; there is no
//!   "invalid record" case.
//! - **Clean termination** - A short trailing record ends the stream, it is
//!   not an error.
//! - **Opaque header** - The header is skipped, never interpreted, by the
//!   record path. [`HeaderInfo`] is a separate best-effort reading of it.
//!
//! See `FORMAT.md` for the byte layout.
//!
//! # Example
//!
//! ```
//! use format::{RecordKind, StitchReader, HEADER_SIZE};
//!
//! let mut bytes = vec![0u8; HEADER_SIZE];
//! bytes.extend_from_slice(&[0x00, 0, 5, 0x01, 0, 5]);
//!
//! let mut reader = StitchReader::open(bytes.as_slice()).unwrap();
//! let first = reader.next_record().unwrap().unwrap();
//! assert_eq!(first.kind(), RecordKind::Stitch);
//! assert_eq!(first.delta(), (5, 0));
//! let second = reader.next_record().unwrap().unwrap();
//! assert_eq!(second.kind(), RecordKind::Jump);
//! assert!(reader.next_record().unwrap().is_none());
//! ```

mod error;
mod header;
mod reader;
mod record;

pub use error::{FormatError, FormatResult};
pub use header::{HeaderInfo, RawHeader, HEADER_SIZE};
pub use reader::StitchReader;
pub use record::{Command, Record, RecordKind, RECORD_SIZE};
