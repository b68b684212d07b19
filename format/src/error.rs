//! Error types for stitch file reading.

use std::fmt;
use std::io;

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while reading a stitch file.
///
/// Short input is never an error: a stream that ends inside the header or
/// inside a record simply has nothing more to decode. The only failure is
/// the underlying source refusing to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The byte source could not be read.
    Io {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// Rendered message of the underlying I/O error.
        message: String,
    },
}

impl From<io::Error> for FormatError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { kind, message } => {
                write!(f, "failed to read stitch data ({kind:?}): {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error_keeps_kind() {
        let err: FormatError = io::Error::new(io::ErrorKind::NotFound, "missing.dsb").into();
        assert!(matches!(
            err,
            FormatError::Io {
                kind: io::ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn display_mentions_message() {
        let err: FormatError =
            io::Error::new(io::ErrorKind::PermissionDenied, "locked by another process").into();
        let msg = err.to_string();
        assert!(msg.contains("locked by another process"));
        assert!(msg.contains("PermissionDenied"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<FormatError>();
    }
}
