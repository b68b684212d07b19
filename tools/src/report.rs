//! Inspection summaries and decode exports.

use std::fmt::Write as _;

use decoder::{
    decode_records, ColorId, ColorOrder, DecodeResult, DecodeStats, Decoded, HeaderInfo, Palette,
    Point, StitchAction,
};
use format::{RawHeader, StitchReader};
use serde::Serialize;

use crate::colors::rgb_for;

/// Header metadata and decode statistics for one file.
#[derive(Debug, Clone)]
pub struct InspectReport {
    /// `None` when the input is shorter than a header.
    pub header: Option<HeaderInfo>,
    pub stats: DecodeStats,
    pub polylines: usize,
    pub actions: usize,
    /// Distinct colors in order of first use.
    pub colors_used: Vec<ColorId>,
}

/// Decodes `bytes` and summarizes the result.
pub fn inspect_bytes(bytes: &[u8], order: &ColorOrder) -> DecodeResult<InspectReport> {
    let mut reader = StitchReader::open(bytes)?;
    let header = reader.header().map(RawHeader::info);
    let decoded = decode_records(&mut reader, order)?;

    let mut colors_used = Vec::new();
    for polyline in &decoded.polylines {
        if !colors_used.contains(&polyline.color) {
            colors_used.push(polyline.color);
        }
    }

    Ok(InspectReport {
        header,
        stats: decoded.stats,
        polylines: decoded.polylines.len(),
        actions: decoded.actions.len(),
        colors_used,
    })
}

/// A palette entry resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorJson {
    pub index: u8,
    pub name: Option<String>,
    pub rgb: [u8; 3],
}

impl ColorJson {
    fn resolve(id: ColorId, palette: &Palette) -> Self {
        let name = palette.name(id).map(str::to_string);
        let rgb = name.as_deref().map_or([0, 0, 0], rgb_for);
        Self {
            index: id.raw(),
            name,
            rgb,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolylineJson {
    pub color: ColorJson,
    pub points: Vec<Point>,
}

/// Decoded output with colors resolved, ready for `serde_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeJson {
    pub polylines: Vec<PolylineJson>,
    pub actions: Vec<StitchAction>,
    pub stats: DecodeStats,
}

/// Resolves colors against `palette`, optionally mirroring Y for
/// screen-space consumers.
#[must_use]
pub fn decode_json(decoded: &Decoded, palette: &Palette, flip_y: bool) -> DecodeJson {
    let orient = |point: Point| if flip_y { point.flip_y() } else { point };
    let polylines = decoded
        .polylines
        .iter()
        .map(|polyline| PolylineJson {
            color: ColorJson::resolve(polyline.color, palette),
            points: polyline.points.iter().copied().map(orient).collect(),
        })
        .collect();
    let actions = decoded
        .actions
        .iter()
        .map(|action| match *action {
            StitchAction::Jump { point } => StitchAction::Jump {
                point: orient(point),
            },
            StitchAction::Draw { point, color } => StitchAction::Draw {
                point: orient(point),
                color,
            },
        })
        .collect();
    DecodeJson {
        polylines,
        actions,
        stats: decoded.stats,
    }
}

/// Human-readable listing of polylines.
#[must_use]
pub fn format_decode_pretty(output: &DecodeJson) -> String {
    let mut out = String::new();
    let stats = &output.stats;
    let _ = writeln!(
        out,
        "records: {} (stitches {}, jumps {}, color changes {})",
        stats.records, stats.stitches, stats.jumps, stats.color_changes
    );
    if let Some(bounds) = stats.bounds {
        let _ = writeln!(
            out,
            "bounds: x {}..{} y {}..{} ({} x {})",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            bounds.width(),
            bounds.height()
        );
    }
    let _ = writeln!(
        out,
        "polylines: {} actions: {}",
        output.polylines.len(),
        output.actions.len()
    );
    for (index, polyline) in output.polylines.iter().enumerate() {
        let name = polyline.color.name.as_deref().unwrap_or("?");
        let [r, g, b] = polyline.color.rgb;
        let _ = write!(
            out,
            "  #{index} {name} (#{r:02x}{g:02x}{b:02x}) {} points:",
            polyline.points.len()
        );
        for point in &polyline.points {
            let _ = write!(out, " ({}, {})", point.x, point.y);
        }
        out.push('\n');
    }
    out
}
