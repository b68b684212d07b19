//! Introspection and debugging tools for DSB stitch files.
//!
//! This crate is a consumer of the decoder, not part of it:
//!
//! - Summarize a file's header metadata and decode statistics
//! - Export decoded polylines and actions as JSON or a readable listing
//! - Trace every record with its signed deltas and needle position
//!
//! Display colors live here. The decoder only hands out palette indices;
//! [`rgb_for`] turns palette names into RGB for output.

mod colors;
mod report;
mod trace;

pub use colors::rgb_for;
pub use report::{
    decode_json, format_decode_pretty, inspect_bytes, ColorJson, DecodeJson, InspectReport,
    PolylineJson,
};
pub use trace::{trace_lines, TraceLine};
