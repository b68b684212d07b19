//! Decodes DSB embroidery stitch files into colored polylines.
//!
//! This crate ties the record layout from `format` to the decoding policy:
//! how records group into runs, which color each run gets, and how runs
//! flatten into a jump/draw sequence for animated playback.
//!
//! # Features
//!
//! - Single pass over the input producing both polylines and actions
//! - Color assignment from a caller-supplied [`ColorOrder`]
//! - Per-decode [`DecodeStats`] with record counts and extents
//! - Optional `serde` support for every output type
//!
//! # Design Principles
//!
//! - **Pure function** - [`decode`] owns no state beyond the call and returns
//!   owned data.
//! - **Total** - Every byte sequence decodes; only I/O can fail.
//! - **Deterministic** - Same inputs produce same outputs.
//!
//! # Example
//!
//! ```
//! use decoder::{decode_bytes, ColorOrder, StitchAction};
//!
//! let mut file = vec![0u8; format::HEADER_SIZE];
//! file.extend_from_slice(&[0x00, 0, 5, 0x01, 0, 5, 0x00, 0, 5]);
//!
//! let order = ColorOrder::from_indices(&[2, 3]).unwrap();
//! let decoded = decode_bytes(&file, &order).unwrap();
//!
//! assert_eq!(decoded.polylines.len(), 2);
//! assert!(matches!(decoded.actions[0], StitchAction::Jump { .. }));
//! ```

mod actions;
mod decode;
mod error;
mod palette;
mod types;

pub use actions::{build_actions, next_jump_after};
pub use decode::{decode, decode_bytes, decode_file, decode_records, Step, StitchDecoder};
pub use error::{DecodeError, DecodeResult};
pub use format::{HeaderInfo, RecordKind};
pub use palette::{ColorCycle, ColorOrder, Palette};
pub use types::{Bounds, ColorId, DecodeStats, Decoded, Point, Polyline, StitchAction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Point::ORIGIN;
        let _ = ColorId::new(0);
        let _ = Palette::default();
        let _ = ColorOrder::default();
        let _ = Decoded::default();

        let _: DecodeResult<()> = Ok(());
    }

    #[test]
    fn default_order_fits_default_palette() {
        assert!(ColorOrder::default().validate(&Palette::default()).is_ok());
    }

    #[test]
    fn decode_is_repeatable() {
        let mut file = vec![0u8; format::HEADER_SIZE];
        file.extend_from_slice(&[0x00, 3, 3, 0x08, 0, 0, 0x40, 2, 2, 0x01, 9, 0, 0x20, 0, 1]);
        let order = ColorOrder::default();
        let first = decode_bytes(&file, &order).unwrap();
        let second = decode_bytes(&file, &order).unwrap();
        assert_eq!(first, second);
    }
}
