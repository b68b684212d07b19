//! Error types for decoding.

use std::fmt;
use std::io;

use format::FormatError;

/// Result type for decoder operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while configuring or running a decode.
///
/// A stream that ends early is not in this list: running out of bytes is
/// how every decode finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte source could not be opened or read.
    Format(FormatError),

    /// A color order must name at least one palette entry.
    EmptyColorOrder,

    /// A color order entry is not a palette index.
    InvalidColorOrder { entry: String },

    /// A color order entry points past the end of the palette.
    ColorOutOfRange { index: u8, palette_len: usize },
}

impl From<FormatError> for DecodeError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        Self::Format(err.into())
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{err}"),
            Self::EmptyColorOrder => write!(f, "color order must not be empty"),
            Self::InvalidColorOrder { entry } => {
                write!(f, "invalid color order entry {entry:?}: expected a palette index")
            }
            Self::ColorOutOfRange { index, palette_len } => {
                write!(
                    f,
                    "color index {index} out of range for palette of {palette_len} colors"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_color_out_of_range() {
        let err = DecodeError::ColorOutOfRange {
            index: 14,
            palette_len: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("14"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn display_invalid_entry() {
        let err = DecodeError::InvalidColorOrder {
            entry: "teal".to_string(),
        };
        assert!(err.to_string().contains("\"teal\""));
    }

    #[test]
    fn io_error_converts_through_format() {
        let err: DecodeError = io::Error::new(io::ErrorKind::NotFound, "no such file").into();
        assert!(matches!(
            err,
            DecodeError::Format(FormatError::Io {
                kind: io::ErrorKind::NotFound,
                ..
            })
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_errors_have_no_source() {
        assert!(std::error::Error::source(&DecodeError::EmptyColorOrder).is_none());
    }
}
